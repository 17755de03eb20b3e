//! JSON call scripts.
//!
//! A script is a list of steps run in order against one object graph:
//!
//! ```json
//! [
//!   {"create": "User", "as": "alice", "args": ["Alice", true]},
//!   {"create": "Post", "as": "hello"},
//!   {"call": "hello", "method": "setAuthor", "args": ["@alice"]},
//!   {"call": "alice", "method": "getPosts"}
//! ]
//! ```
//!
//! `create` with `args` runs the type's constructor; without `args` the
//! object starts from defaults. A string argument `"@name"` refers to the
//! object created under that alias.

use accessible_dispatch::{DispatchError, ObjectGraph};
use accessible_types::{ObjectId, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown alias @{0}")]
    UnknownAlias(String),

    #[error("alias @{0} is already bound")]
    DuplicateAlias(String),

    #[error("step {step}: {source}")]
    Dispatch {
        step: usize,
        #[source]
        source: DispatchError,
    },
}

/// One script step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Create {
        create: String,
        #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<Vec<serde_json::Value>>,
    },
    Call {
        call: String,
        method: String,
        #[serde(default)]
        args: Vec<serde_json::Value>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json_str(contents: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(contents)?)
    }
}

/// What a step produced, rendered for output.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutput {
    Created { alias: String, type_name: String },
    Returned { call: String, value: serde_json::Value },
}

impl std::fmt::Display for StepOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created { alias, type_name } => write!(f, "@{alias} = new {type_name}"),
            Self::Returned { call, value } => write!(f, "{call} -> {value}"),
        }
    }
}

/// Runs script steps against a graph, tracking aliases.
pub struct Runner {
    graph: ObjectGraph,
    aliases: HashMap<String, ObjectId>,
    names: HashMap<ObjectId, String>,
    steps_run: usize,
}

impl Runner {
    pub fn new(graph: ObjectGraph) -> Self {
        Self {
            graph,
            aliases: HashMap::new(),
            names: HashMap::new(),
            steps_run: 0,
        }
    }

    pub fn graph(&self) -> &ObjectGraph {
        &self.graph
    }

    /// The object bound to `alias`.
    pub fn object(&self, alias: &str) -> Option<ObjectId> {
        self.aliases.get(alias).copied()
    }

    /// Runs every step, stopping at the first failure.
    pub fn run(&mut self, script: &Script) -> Result<Vec<StepOutput>, ScriptError> {
        script.steps.iter().map(|step| self.step(step)).collect()
    }

    pub fn step(&mut self, step: &Step) -> Result<StepOutput, ScriptError> {
        self.steps_run += 1;
        let index = self.steps_run;
        let dispatch = |source| ScriptError::Dispatch { step: index, source };

        match step {
            Step::Create { create, alias, args } => {
                let alias = alias.clone().unwrap_or_else(|| format!("{}{index}", create.to_lowercase()));
                if self.aliases.contains_key(&alias) {
                    return Err(ScriptError::DuplicateAlias(alias));
                }
                let id = match args {
                    Some(args) => {
                        let args = self.resolve_args(args)?;
                        self.graph.construct(create, &args).map_err(dispatch)?
                    }
                    None => self.graph.create(create).map_err(dispatch)?,
                };
                debug!(alias = %alias, object = %id, "Bound alias");
                self.aliases.insert(alias.clone(), id);
                self.names.insert(id, alias.clone());
                Ok(StepOutput::Created {
                    alias,
                    type_name: create.clone(),
                })
            }
            Step::Call { call, method, args } => {
                let id = self
                    .object(call)
                    .ok_or_else(|| ScriptError::UnknownAlias(call.clone()))?;
                let args = self.resolve_args(args)?;
                let result = self.graph.invoke(id, method, &args).map_err(dispatch)?;
                let rendered: Vec<String> = args.iter().map(|a| self.render(a).to_string()).collect();
                Ok(StepOutput::Returned {
                    call: format!("@{call}.{method}({})", rendered.join(", ")),
                    value: self.render(&result),
                })
            }
        }
    }

    fn resolve_args(&self, args: &[serde_json::Value]) -> Result<Vec<Value>, ScriptError> {
        args.iter().map(|a| self.resolve(a)).collect()
    }

    /// Converts a JSON argument, turning `"@alias"` strings into references.
    fn resolve(&self, json: &serde_json::Value) -> Result<Value, ScriptError> {
        match json {
            serde_json::Value::String(s) => match s.strip_prefix('@') {
                Some(alias) => self
                    .object(alias)
                    .map(Value::Ref)
                    .ok_or_else(|| ScriptError::UnknownAlias(alias.to_string())),
                None => Ok(Value::Text(s.clone())),
            },
            serde_json::Value::Array(items) => Ok(Value::List(self.resolve_args(items)?)),
            serde_json::Value::Object(fields) => {
                let entries = fields
                    .iter()
                    .map(|(k, v)| Ok((Value::Text(k.clone()), self.resolve(v)?)))
                    .collect::<Result<_, ScriptError>>()?;
                Ok(Value::Map(entries))
            }
            other => Ok(Value::from_json(other)),
        }
    }

    /// Renders a value as JSON, showing references by alias.
    fn render(&self, value: &Value) -> serde_json::Value {
        match value {
            Value::Ref(id) => match self.names.get(id) {
                Some(alias) => serde_json::Value::String(format!("@{alias}")),
                None => value.to_json(),
            },
            Value::List(items) | Value::Set(items) => {
                serde_json::Value::Array(items.iter().map(|v| self.render(v)).collect())
            }
            Value::Map(entries) => serde_json::Value::Array(
                entries
                    .iter()
                    .map(|(k, v)| serde_json::Value::Array(vec![self.render(k), self.render(v)]))
                    .collect(),
            ),
            other => other.to_json(),
        }
    }
}
