use serde_json::{Map, Value};

use crate::domain::VerifyContact;

pub fn encode_verify_contact_body(request: &VerifyContact) -> Map<String, Value> {
    let mut body = Map::new();
    let channel = request.channel().as_str();

    body.insert("type".to_owned(), Value::from(channel));
    body.insert(channel.to_owned(), Value::from(request.contact()));

    if let Some(code) = request.code_value() {
        body.insert("code".to_owned(), Value::from(code));
    }
    if let Some(name) = request.display_name_value() {
        body.insert("name".to_owned(), Value::from(name));
    }
    if let Some(url) = request.redirect_url_value() {
        body.insert("redirectUrl".to_owned(), Value::from(url));
    }
    if let Some(minutes) = request.expiration_minutes_value() {
        body.insert("expirationMinutes".to_owned(), Value::from(minutes));
    }
    if let Some(ids) = request.promote_to_list_ids_value() {
        body.insert("promoteToListIds".to_owned(), Value::from(ids.to_vec()));
    }

    body
}
