use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub access_token: String,
}

impl User {
    pub(crate) fn new(id: Uuid, username: String, access_token: String) -> Self {
        User {
            id,
            username,
            access_token,
        }
    }
}
