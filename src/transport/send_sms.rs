use serde_json::{Map, Value};

use crate::domain::SendSms;

pub fn encode_send_sms_body(request: &SendSms) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("message".to_owned(), Value::from(request.message()));
    body.insert(
        SendSms::DESTINATION_FIELD.to_owned(),
        Value::from(request.recipients().to_vec()),
    );
    body
}
