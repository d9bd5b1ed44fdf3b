use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use hocon::{Hocon, HoconLoader};

/// Reads component options from a HOCON document. Lookup precedence: the
/// process environment, then the named scope, then the document root.
#[derive(Debug)]
pub struct ConfigLoader {
    document: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    /// Environment variables are captured once, at construction.
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();

        let document = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("failed to load config file {:?}", path))?
            .hocon()?;

        Ok(Self {
            document,
            env: std::env::vars().collect(),
            scope,
        })
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(name) {
            return Some(Value::String(value.clone()));
        }

        self.scoped_value(name)
            .or_else(|| Self::value_at(&self.document, name))
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        T::load(self)
    }

    fn scoped_value(&self, name: &str) -> Option<Value> {
        match &self.document[self.scope.as_str()] {
            scoped @ Hocon::Hash(_) => Self::value_at(scoped, name),
            _ => None,
        }
    }

    fn value_at(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Integer(val) => Some(Value::Integer(*val as usize)),
            Hocon::String(val) => Some(Value::String(val.clone())),
            Hocon::Boolean(val) => Some(Value::Boolean(*val)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Value {
    String(String),
    Integer(usize),
    Boolean(bool),
}

impl Value {
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => Some(*val),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => val.parse::<bool>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Integer(val) => Some(val.to_string()),
            Value::Boolean(val) => Some(val.to_string()),
        }
    }
}

/// Implemented by each options struct that can be populated from a
/// [`ConfigLoader`].
pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_scoped_values_override_the_document_root() {
        let path = write_config(
            "common_config_scope_test.conf",
            "depth = 2\nsearch {\n  depth = 4\n}\n",
        );
        let config = ConfigLoader::new(&path, "search".to_string()).unwrap();

        assert_eq!(config.get("depth").and_then(|v| v.as_usize()), Some(4));
    }

    #[test]
    fn test_root_values_apply_outside_the_scope() {
        let path = write_config(
            "common_config_root_test.conf",
            "depth = 2\nsearch {\n  strategy = \"minmax\"\n}\n",
        );
        let config = ConfigLoader::new(&path, "search".to_string()).unwrap();

        assert_eq!(config.get("depth").and_then(|v| v.as_usize()), Some(2));
        assert!(config.get("missing").is_none());
    }

    #[test]
    fn test_environment_overrides_the_file() {
        std::env::set_var("COMMON_CONFIG_ENV_TEST_DEPTH", "7");
        let path = write_config(
            "common_config_env_test.conf",
            "COMMON_CONFIG_ENV_TEST_DEPTH = 3\n",
        );
        let config = ConfigLoader::new(&path, "search".to_string()).unwrap();

        assert_eq!(
            config
                .get("COMMON_CONFIG_ENV_TEST_DEPTH")
                .and_then(|v| v.as_usize()),
            Some(7)
        );
    }

    #[test]
    fn test_value_coercions() {
        assert_eq!(Value::String("5".to_string()).as_usize(), Some(5));
        assert_eq!(Value::String("x".to_string()).as_usize(), None);
        assert_eq!(Value::String("true".to_string()).as_bool(), Some(true));
        assert_eq!(Value::Integer(5).as_string(), Some("5".to_string()));
        assert_eq!(Value::Boolean(false).as_usize(), None);
    }
}
