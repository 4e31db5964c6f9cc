use log::{error, info};
use ustr::Ustr;

use super::{GatewayError, GatewayResult, OnDelete, OnList, PatientGateway};
use crate::config::BusinessConfig;
use crate::patient::{PatientId, PatientListParams, PatientListResponse};

/// Gateway backed by `ehttp`, which works on native and on the web.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: Ustr,
}

impl HttpGateway {
    pub fn new(config: &BusinessConfig) -> Self {
        Self {
            base_url: config.api_base_url(),
        }
    }

    pub fn list_url(&self, params: &PatientListParams) -> String {
        let query = params
            .query_pairs()
            .into_iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");

        if query.is_empty() {
            format!("{}/patients", self.base_url)
        } else {
            format!("{}/patients?{query}", self.base_url)
        }
    }

    pub fn delete_url(&self, id: PatientId) -> String {
        format!("{}/patients/{id}", self.base_url)
    }
}

fn check_status(result: ehttp::Result<ehttp::Response>) -> GatewayResult<ehttp::Response> {
    let response = result.map_err(GatewayError::Transport)?;
    if !response.ok {
        return Err(GatewayError::Status(response.status));
    }
    Ok(response)
}

fn decode_list(result: ehttp::Result<ehttp::Response>) -> GatewayResult<PatientListResponse> {
    let response = check_status(result)?;
    serde_json::from_slice(&response.bytes).map_err(|e| GatewayError::Decode(e.to_string()))
}

impl PatientGateway for HttpGateway {
    fn list(&self, params: &PatientListParams, on_done: OnList) {
        let url = self.list_url(params);
        info!("GET {url}");

        ehttp::fetch(ehttp::Request::get(&url), move |result| {
            let decoded = decode_list(result);
            if let Err(err) = &decoded {
                error!("Error fetching patients from {url}: {err}");
            }
            on_done(decoded);
        });
    }

    fn delete(&self, id: PatientId, on_done: OnDelete) {
        let url = self.delete_url(id);
        info!("DELETE {url}");

        let mut request = ehttp::Request::get(&url);
        request.method = "DELETE".to_owned();

        ehttp::fetch(request, move |result| {
            let outcome = check_status(result).map(|_| ());
            if let Err(err) = &outcome {
                error!("Error deleting patient {id}: {err}");
            }
            on_done(outcome);
        });
    }
}
