// Registration of this process with the configured service registry.

use crate::{config::Systems, error::Result};

/// Extension point for announcing this process to the service registry.
///
/// No registration protocol is defined for the adapter yet, so this sends
/// nothing and always succeeds. It is the place to add the registry client.
pub fn register_service(systems: &Systems) -> Result<()> {
  tracing::debug!(
    service_registry = %systems.service_registry.endpoint(),
    "Service registration is not implemented, skipping."
  );
  Ok(())
}
