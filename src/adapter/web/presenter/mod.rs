pub mod http_response;
