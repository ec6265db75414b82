use crate::server::data::role::RoleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_user_to_role;
mod get_role_names_for_user;
mod is_user_in_role;
