mod session;

pub(crate) use session::{
    create_new_session_with_uid, get_user_from_session, prepare_logout_response,
};
