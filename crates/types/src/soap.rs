//! Legacy SOAP envelope construction
//!
//! SOAP is a compatibility mode only: the same logical payload a REST
//! request carries as query parameters is wrapped in an XML envelope with a
//! UsernameToken security header. Only the serializer side exists; the
//! modern API answers in JSON.

const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const WSSE_NS: &str =
	"http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";

/// Credential pair for the legacy security header.
///
/// On the current API generation only the password (the API key) is used;
/// the username stays empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameToken {
	pub username: String,
	pub password: String,
}

impl UsernameToken {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			password: password.into(),
		}
	}

	/// Render the `wsse:Security` header element
	pub fn security_header(&self) -> String {
		format!(
			"<wsse:Security><wsse:UsernameToken><wsse:Username>{}</wsse:Username><wsse:Password>{}</wsse:Password></wsse:UsernameToken></wsse:Security>",
			escape_xml(&self.username),
			escape_xml(&self.password),
		)
	}
}

/// Wrap a serialized body element in a complete SOAP envelope
pub fn envelope(body: &str, token: &UsernameToken) -> String {
	format!(
		"<soap:Envelope xmlns:soap=\"{SOAP_ENV_NS}\" xmlns:wsse=\"{WSSE_NS}\"><soap:Header>{}</soap:Header><soap:Body>{body}</soap:Body></soap:Envelope>",
		token.security_header(),
	)
}

/// Render a flat sequence of named text elements, skipping absent values
pub fn text_elements(fields: &[(&str, Option<&str>)]) -> String {
	let mut out = String::new();
	for (name, value) in fields {
		if let Some(value) = value {
			out.push('<');
			out.push_str(name);
			out.push('>');
			out.push_str(&escape_xml(value));
			out.push_str("</");
			out.push_str(name);
			out.push('>');
		}
	}
	out
}

fn escape_xml(value: &str) -> String {
	let mut out = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&apos;"),
			other => out.push(other),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_username_token_header() {
		let token = UsernameToken::new("", "test");
		let header = token.security_header();
		assert_eq!(
			header,
			"<wsse:Security><wsse:UsernameToken><wsse:Username></wsse:Username><wsse:Password>test</wsse:Password></wsse:UsernameToken></wsse:Security>"
		);
	}

	#[test]
	fn test_envelope_carries_header_and_body() {
		let token = UsernameToken::new("", "apikey");
		let xml = envelope("<GetTimeframes/>", &token);
		assert!(xml.starts_with("<soap:Envelope"));
		assert!(xml.contains("<wsse:Password>apikey</wsse:Password>"));
		assert!(xml.contains("<soap:Body><GetTimeframes/></soap:Body>"));
	}

	#[test]
	fn test_text_elements_skip_absent_and_escape() {
		let rendered = text_elements(&[
			("PostalCode", Some("2132WT")),
			("Street", None),
			("City", Some("A&B")),
		]);
		assert_eq!(rendered, "<PostalCode>2132WT</PostalCode><City>A&amp;B</City>");
	}
}
