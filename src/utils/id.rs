use uuid::Uuid;

const MESSAGE_ID_PREFIX: &str = "msg_";
const MESSAGE_ID_HEX_LEN: usize = 8;

/// Returns `msg_` followed by 8 lowercase hex characters of a fresh v4 UUID.
pub fn generate_message_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}{}", MESSAGE_ID_PREFIX, &hex[..MESSAGE_ID_HEX_LEN])
}

pub fn is_message_id(id: &str) -> bool {
    match id.strip_prefix(MESSAGE_ID_PREFIX) {
        Some(hex) =>
            hex.len() == MESSAGE_ID_HEX_LEN &&
                hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        None => false,
    }
}
