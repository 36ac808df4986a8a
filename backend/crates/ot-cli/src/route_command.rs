use crate::error::{CliError, Result as CliErrorResult};
use crate::Context;

use ot_auth::{LandingView, ProfileConsistencyResolver, Resolution, RetryPolicy, TokioClock};
use ot_core::Identity;
use ot_db::SqliteProfileStore;

use std::sync::Arc;

use serde_json::{Value, json};

/// Resolve a stored profile the way a dashboard does (no provisioning, no
/// last-login write) and report the landing page.
pub(crate) async fn route(ctx: &Context, uid: &str) -> CliErrorResult<Value> {
    let resolver = ProfileConsistencyResolver::new(
        Arc::new(SqliteProfileStore::new(ctx.pool.clone())),
        Arc::new(TokioClock),
    );
    let policy = RetryPolicy::dashboard(&ctx.resolver);

    match resolver
        .resolve_without_touch(&Identity::new(uid, ""), &policy)
        .await?
    {
        Resolution::Found(profile) => {
            let landing = LandingView::for_profile(&profile);
            Ok(json!({
                "uid": profile.uid,
                "role": profile.role,
                "status": profile.status,
                "landing": landing.path(),
            }))
        }
        Resolution::NotFound => Err(CliError::not_found("Profile", uid)),
    }
}
