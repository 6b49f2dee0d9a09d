/*! Integration tests for Jackut.
 *
 * One test binary driving the public `Facade`, split by feature:
 * - users: signup, login, profile attributes
 * - friends: requests and confirmed friendships
 * - messages: private and community inboxes
 * - communities: creation, membership, listing
 * - relations: fans, crushes, enemies
 * - lifecycle: close/reopen, reset, account removal
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("jackut=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod communities;
mod friends;
mod messages;
mod relations;
