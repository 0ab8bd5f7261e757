//! User domain entity

/// A persisted user row. `id` is assigned by storage and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub is_active: bool,
}

/// The four mutable columns, written together on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub is_active: bool,
}

impl User {
    pub fn from_fields(id: i32, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone_number: fields.phone_number,
            is_active: fields.is_active,
        }
    }

    /// Overwrites every mutable column; there is no partial update.
    pub fn apply(&mut self, fields: UserFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone_number = fields.phone_number;
        self.is_active = fields.is_active;
    }

    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            is_active: self.is_active,
        }
    }
}
