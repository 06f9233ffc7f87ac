use crate::domain::entities::users::user::Role;

/// 엔드포인트가 요구하는 역할
#[derive(Debug, Clone)]
pub enum RequiredRole {
    Single(Role),
    /// 나열된 역할 중 하나만 있으면 통과
    Any(Vec<Role>),
}

impl RequiredRole {
    pub fn is_satisfied(&self, user_role: Role) -> bool {
        match self {
            RequiredRole::Single(required) => *required == user_role,
            RequiredRole::Any(required) => required.contains(&user_role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role() {
        assert!(RequiredRole::Single(Role::Seller).is_satisfied(Role::Seller));
        assert!(!RequiredRole::Single(Role::Seller).is_satisfied(Role::User));
        assert!(RequiredRole::Any(vec![Role::User, Role::Seller]).is_satisfied(Role::User));
        assert!(!RequiredRole::Any(vec![]).is_satisfied(Role::User));
    }
}
