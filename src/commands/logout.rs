use crate::{
    libs::{
        messages::Message,
        secret::{Secret, TOKEN_FILE_NAME},
    },
    msg_info, msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    match Secret::new(TOKEN_FILE_NAME).delete()? {
        true => msg_success!(Message::TokenDeleted),
        false => msg_info!(Message::TokenNotStored),
    }

    Ok(())
}
