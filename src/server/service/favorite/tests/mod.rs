use holocron_test_utils::prelude::*;

use crate::{
    model::favorite::FavoriteKind,
    server::{
        error::{favorite::FavoriteError, Error},
        service::favorite::FavoriteService,
    },
};
