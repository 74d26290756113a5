// End-to-end integration tests for the recipe catalog
//
// These tests use a shared testcontainers PostgreSQL instance with a database
// pool for test isolation. Each test receives its own isolated database from
// the pool, allowing tests to run in parallel without conflicts.
//
// Architecture:
// - One shared PostgreSQL container for the entire test suite
// - Database pool creates/manages isolated databases (test_db_<uuid>)
// - Each test gets a unique database via test-context lifecycle hooks
// - Databases are truncated and recycled after test completion
//
// Repository tests talk to RecipeRepository directly; API tests go through
// the real router on an ephemeral port.

mod test_health;
