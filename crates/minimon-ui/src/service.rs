//! Secondary network service collaborator boundary.
//!
//! A minimal status page served while connected. The core only decides when
//! it runs; content generation is entirely outside the core.

/// Start/stop/pump seam for the status service.
pub trait StatusService {
    fn start(&mut self);
    fn stop(&mut self);

    /// Give the service a chance to process pending work. Called once per
    /// tick while the service is running.
    fn pump(&mut self);
}
