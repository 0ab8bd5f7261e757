//! RPC method routing

pub const SERVICE_PREFIX: &str = "/rpc/UserService";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Method {
    CreateUser,
    GetUser,
    UpdateUser,
    DeleteUser,
    ListUsers,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::CreateUser,
        Method::GetUser,
        Method::UpdateUser,
        Method::DeleteUser,
        Method::ListUsers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Method::CreateUser => "CreateUser",
            Method::GetUser => "GetUser",
            Method::UpdateUser => "UpdateUser",
            Method::DeleteUser => "DeleteUser",
            Method::ListUsers => "ListUsers",
        }
    }

    /// Route path, e.g. `/rpc/UserService/GetUser`
    pub fn path(&self) -> &'static str {
        match self {
            Method::CreateUser => "/rpc/UserService/CreateUser",
            Method::GetUser => "/rpc/UserService/GetUser",
            Method::UpdateUser => "/rpc/UserService/UpdateUser",
            Method::DeleteUser => "/rpc/UserService/DeleteUser",
            Method::ListUsers => "/rpc/UserService/ListUsers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_share_the_service_prefix() {
        for method in Method::ALL {
            assert_eq!(
                method.path(),
                format!("{}/{}", SERVICE_PREFIX, method.name())
            );
        }
    }
}
