use clap::Args;
use jiff::{SignedDuration, Timestamp};
use meet_app::{
    auth::{JwtSecret, issue_token},
    domain::persons::records::PersonUuid,
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// Person the token authenticates
    #[arg(long)]
    person_uuid: Uuid,

    /// HMAC secret shared with the API server
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// Token lifetime in seconds
    #[arg(long, env = "JWT_TTL_SECONDS", default_value_t = 86_400)]
    ttl_seconds: i64,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    let now = Timestamp::now();
    let ttl = SignedDuration::from_secs(args.ttl_seconds);

    let token = issue_token(
        &JwtSecret::new(args.jwt_secret),
        PersonUuid::from_uuid(args.person_uuid),
        ttl,
        now,
    )
    .map_err(|error| format!("failed to create token: {error}"))?;

    let expires_at = now
        .checked_add(ttl)
        .map_err(|error| format!("invalid token lifetime: {error}"))?;

    println!("person_uuid: {}", args.person_uuid);
    println!("token_expires_at: {expires_at}");
    println!("bearer_token: {token}");

    Ok(())
}
