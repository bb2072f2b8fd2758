//! File Download
//!
//! Saves text as a client-local file through a temporary `download` anchor.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;

/// Characters escaped the way `encodeURIComponent` does
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `data:` URI carrying a JSON document
pub fn json_data_uri(json: &str) -> String {
    format!(
        "data:text/json;charset=utf-8,{}",
        utf8_percent_encode(json, URI_COMPONENT)
    )
}

/// Offer `json` to the user as a file named `file_name`
pub fn save_json_file(file_name: &str, json: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or("No document available")?;
    let body = document.body().ok_or("Document has no body")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Created element is not an anchor".to_string())?;
    anchor.set_href(&json_data_uri(json));
    anchor.set_download(file_name);

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to attach anchor: {:?}", e))?;
    anchor.click();
    anchor.remove();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_data_uri_encoding() {
        let uri = json_data_uri("{\n  \"a\": \"x y\"\n}");
        assert_eq!(uri, "data:text/json;charset=utf-8,%7B%0A%20%20%22a%22%3A%20%22x%20y%22%0A%7D");
    }

    #[test]
    fn test_json_data_uri_keeps_unreserved_and_encodes_utf8() {
        let uri = json_data_uri("a-b_c.d!e~f*g'h(i)j#é");
        assert_eq!(uri, "data:text/json;charset=utf-8,a-b_c.d!e~f*g'h(i)j%23%C3%A9");
    }
}
