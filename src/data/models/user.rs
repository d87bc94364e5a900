use crate::data::models::schema::*;
use diesel::deserialize::FromSqlRow;
use diesel::expression::AsExpression;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub role: UserRole,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = users)]
pub struct UpdateUser<'a> {
    pub username: Option<&'a str>,
    pub password_hash: Option<&'a str>,
    pub role: Option<UserRole>,
}

/// Account role, stored as a SMALLINT column.
///
/// Authorization decisions compare `privilege_level`, never the enum's
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = diesel::sql_types::SmallInt)]
pub enum UserRole {
    Member,
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub fn privilege_level(&self) -> u8 {
        match self {
            UserRole::Member => 0,
            UserRole::Admin => 10,
            UserRole::SuperAdmin => 20,
        }
    }

    pub fn is_at_least(&self, required: UserRole) -> bool {
        self.privilege_level() >= required.privilege_level()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => "MEMBER",
            UserRole::Admin => "ADMIN",
            UserRole::SuperAdmin => "SUPER_ADMIN",
        }
    }
}

impl From<UserRole> for i16 {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Member => 0,
            UserRole::Admin => 1,
            UserRole::SuperAdmin => 2,
        }
    }
}

impl TryFrom<i16> for UserRole {
    type Error = &'static str;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserRole::Member),
            1 => Ok(UserRole::Admin),
            2 => Ok(UserRole::SuperAdmin),
            _ => Err("Unknown user role"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_is_below_admin() {
        assert!(!UserRole::Member.is_at_least(UserRole::Admin));
        assert!(UserRole::Admin.is_at_least(UserRole::Member));
    }

    #[test]
    fn admin_or_above_satisfies_admin_check() {
        assert!(UserRole::Admin.is_at_least(UserRole::Admin));
        assert!(UserRole::SuperAdmin.is_at_least(UserRole::Admin));
    }

    #[test]
    fn privilege_levels_are_strictly_ordered() {
        assert!(UserRole::Member.privilege_level() < UserRole::Admin.privilege_level());
        assert!(UserRole::Admin.privilege_level() < UserRole::SuperAdmin.privilege_level());
    }

    #[test]
    fn role_round_trips_through_column_value() {
        for role in [UserRole::Member, UserRole::Admin, UserRole::SuperAdmin] {
            assert_eq!(UserRole::try_from(i16::from(role)), Ok(role));
        }
        assert!(UserRole::try_from(7).is_err());
    }
}
