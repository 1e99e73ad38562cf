use crate::server::{
    data::user::UserRepository,
    model::{pagination::PageRequest, user::CreateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials_by_email;
mod get_all_paginated;
mod set_avatar;
