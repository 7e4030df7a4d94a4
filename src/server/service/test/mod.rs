use crate::server::model::user::User;

mod schedule;

fn to_domain(user: entity::user::Model) -> User {
    User::from_entity(user)
}
