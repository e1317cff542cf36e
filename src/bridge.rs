//! Conversions between chain values and `http` crate types.
//!
//! The listener collaborator that owns the socket speaks
//! `http::Request`/`http::Response`. These conversions are the seam it
//! plugs into: the buffered wire request converts into a [`Request`],
//! goes through [`Chain::respond`](crate::Chain::respond), and the
//! resulting [`Response`] converts back for the wire.

use bytes::Bytes;

use crate::message::{Request, Response};

impl From<http::Request<Bytes>> for Request {
    fn from(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        }
    }
}

impl From<Request> for http::Request<Bytes> {
    fn from(req: Request) -> Self {
        let mut out = http::Request::new(req.body);
        *out.method_mut() = req.method;
        *out.uri_mut() = req.uri;
        *out.headers_mut() = req.headers;
        out
    }
}

impl From<http::Response<Bytes>> for Response {
    fn from(res: http::Response<Bytes>) -> Self {
        let (parts, body) = res.into_parts();
        Self {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}

impl From<Response> for http::Response<Bytes> {
    fn from(res: Response) -> Self {
        let mut out = http::Response::new(res.body);
        *out.status_mut() = res.status;
        *out.headers_mut() = res.headers;
        out
    }
}
