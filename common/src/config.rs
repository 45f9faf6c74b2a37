use std::{collections::HashMap, path::Path};

use anyhow::{anyhow, Context, Result};
use hocon::{Hocon, HoconLoader};
use log::debug;

/// Layered settings lookup: environment variables first, then the scoped
/// section of the config file, then the top level of the file.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(anyhow!("The config file {:?} was not found", path));
        }

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()?;

        debug!("Loaded config {:?} with scope {}", path, scope);

        Ok(Self::with_hocon(hocon, std::env::vars().collect(), scope))
    }

    /// A loader without a file; only environment variables are consulted.
    pub fn from_env(scope: String) -> Self {
        Self::with_hocon(
            Hocon::Hash(Default::default()),
            std::env::vars().collect(),
            scope,
        )
    }

    pub fn from_hocon_str(contents: &str, scope: String) -> Result<Self> {
        let hocon = HoconLoader::new()
            .load_str(contents)
            .context("Failed to parse config")?
            .hocon()?;

        Ok(Self::with_hocon(hocon, HashMap::new(), scope))
    }

    fn with_hocon(hocon: Hocon, env: HashMap<String, String>, scope: String) -> Self {
        Self { hocon, env, scope }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        let scoped_env_key = format!("{}_{}", self.scope, name).to_uppercase();
        if let Some(value) = self
            .env
            .get(&scoped_env_key)
            .or_else(|| self.env.get(&name.to_uppercase()))
        {
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    pub fn get_usize(&self, name: &str) -> Result<Option<usize>> {
        self.get_typed(name, Value::as_usize, "an unsigned integer")
    }

    pub fn get_u64(&self, name: &str) -> Result<Option<u64>> {
        self.get_typed(name, Value::as_u64, "an unsigned integer")
    }

    pub fn get_f32(&self, name: &str) -> Result<Option<f32>> {
        self.get_typed(name, Value::as_f32, "a number")
    }

    pub fn get_bool(&self, name: &str) -> Result<Option<bool>> {
        self.get_typed(name, Value::as_bool, "a boolean")
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        let res = T::load(self)?;
        Ok(res)
    }

    fn get_typed<T>(
        &self,
        name: &str,
        convert: impl Fn(&Value) -> Option<T>,
        expected: &str,
    ) -> Result<Option<T>> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => convert(&value)
                .map(Some)
                .ok_or_else(|| anyhow!("Config value {} must be {}, got {:?}", name, expected, value)),
        }
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Real(f64) => Some(Value::Float(*f64 as f32)),
            Hocon::Integer(i64) => Some(Value::Integer(*i64)),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(bool) => Some(Value::Boolean(*bool)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f32),
    Boolean(bool),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => Hocon::String(val.clone()).as_bool(),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => usize::try_from(*val).ok(),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(val) => u64::try_from(*val).ok(),
            Value::String(val) => val.parse::<u64>().ok(),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(val) => Some(*val),
            Value::Integer(val) => Some(*val as f32),
            Value::String(val) => val.parse::<f32>().ok(),
            _ => None,
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}
