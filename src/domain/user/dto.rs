use super::UserRole;

/// Fields for inserting a brand-new user row
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: UserRole,
    pub is_approved: bool,
}

/// Profile data supplied by the identity provider on sign-in.
///
/// Upserting never touches role or approval of an existing row.
#[derive(Debug, Clone)]
pub struct UpsertUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

impl From<UpsertUser> for NewUser {
    fn from(u: UpsertUser) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            profile_image_url: u.profile_image_url,
            role: UserRole::default(),
            is_approved: true,
        }
    }
}
