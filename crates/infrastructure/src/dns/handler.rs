use super::nameserver::Nameserver;
use hickory_proto::op::{Edns, Header, ResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error};

/// Adapts the [`Nameserver`] to hickory-server's request dispatch.
#[derive(Clone)]
pub struct DnsServerHandler {
    nameserver: Arc<Nameserver>,
}

impl DnsServerHandler {
    pub fn new(nameserver: Arc<Nameserver>) -> Self {
        Self { nameserver }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = request_info.query.original();
        let client_ip = request.src().ip();

        debug!(
            domain = %query.name(),
            record_type = ?query.query_type(),
            client = %client_ip,
            "DNS query received"
        );

        let zone_response = self
            .nameserver
            .handle_query(query.name(), query.query_type())
            .await;

        if zone_response.response_code != ResponseCode::NoError {
            return send_error_response(request, &mut response_handle, zone_response.response_code)
                .await;
        }

        debug!(
            domain = %query.name(),
            answers = zone_response.answers.len(),
            authority = zone_response.authority.len(),
            "Sending response"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        let mut response = builder.build(
            header,
            zone_response.answers.iter(),
            &[],
            zone_response.authority.iter(),
            &[],
        );
        if let Some(edns) = response_edns(request) {
            response.set_edns(edns);
        }

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

/// Echoes EDNS so clients that advertise a larger UDP payload get answers
/// above 512 bytes without truncation.
fn response_edns(request: &Request) -> Option<Edns> {
    request.edns().map(|req_edns| {
        let mut edns = Edns::new();
        edns.set_max_payload(req_edns.max_payload().max(512))
            .set_version(0)
            .set_dnssec_ok(false);
        edns
    })
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build_no_records(header);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
