//! Request shapes for the execution admin endpoints
//!
//! Each form maps to one `ExecutionRequest`. Field values are copied from the
//! form verbatim: validation is the backend's job.

use reqwest::{Method, Url};
use serde::Serialize;

use super::types::ExecutionForm;
use crate::services::client::{ClientError, ClientResult};

/// Content type declared on every execution call
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Default mount point of the execution endpoints, relative to the admin page
pub const DEFAULT_ENDPOINT_PREFIX: &str = "execution";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionEndpoint {
    Retrieve,
    RetrieveManual,
    Review,
    Load,
}

impl ExecutionEndpoint {
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionEndpoint::Retrieve => "retrieve",
            ExecutionEndpoint::RetrieveManual => "retrieve_manual",
            ExecutionEndpoint::Review => "review",
            ExecutionEndpoint::Load => "load",
        }
    }

    /// Relative path under the given prefix, e.g. `execution/retrieve`
    pub fn path(&self, prefix: &str) -> String {
        let prefix = prefix.trim_matches('/');
        if prefix.is_empty() {
            self.name().to_string()
        } else {
            format!("{}/{}", prefix, self.name())
        }
    }

    pub fn method(&self) -> Method {
        match self {
            ExecutionEndpoint::RetrieveManual => Method::POST,
            _ => Method::GET,
        }
    }
}

/// Figures typed into the manual download form, serialized as the POST body
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManualFigures {
    pub ingresos: String,
    pub gastos: String,
    pub inversiones: String,
    pub ingresos_eliminaciones_bruto: String,
    pub gastos_eliminaciones_bruto: String,
}

impl From<&ExecutionForm> for ManualFigures {
    fn from(form: &ExecutionForm) -> Self {
        Self {
            ingresos: form.ingresos.clone(),
            gastos: form.gastos.clone(),
            inversiones: form.inversiones.clone(),
            ingresos_eliminaciones_bruto: form.ingresos_eliminaciones_bruto.clone(),
            gastos_eliminaciones_bruto: form.gastos_eliminaciones_bruto.clone(),
        }
    }
}

/// One call to an execution endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionRequest {
    pub endpoint: ExecutionEndpoint,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ExecutionRequest {
    /// Automatic (scraped) retrieval for the selected period
    pub fn scrap_download(form: &ExecutionForm) -> Self {
        Self {
            endpoint: ExecutionEndpoint::Retrieve,
            query: period_query(form, true),
            body: None,
        }
    }

    /// Manual retrieval: period in the query string, figures in a JSON body
    pub fn manual_download(form: &ExecutionForm) -> ClientResult<Self> {
        let body = serde_json::to_string(&ManualFigures::from(form))?;
        Ok(Self {
            endpoint: ExecutionEndpoint::RetrieveManual,
            query: period_query(form, false),
            body: Some(body),
        })
    }

    pub fn review() -> Self {
        Self {
            endpoint: ExecutionEndpoint::Review,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn load() -> Self {
        Self {
            endpoint: ExecutionEndpoint::Load,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn method(&self) -> Method {
        self.endpoint.method()
    }

    /// Resolve the endpoint against the admin page URL and append the query
    pub fn url(&self, base: &Url, prefix: &str) -> ClientResult<Url> {
        let path = self.endpoint.path(prefix);
        let mut url = base.join(&path).map_err(|e| ClientError::EndpointResolution {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

fn period_query(form: &ExecutionForm, scrap: bool) -> Vec<(String, String)> {
    vec![
        ("month".to_string(), form.month.clone()),
        ("year".to_string(), form.year.clone()),
        ("scrap".to_string(), scrap.to_string()),
    ]
}
