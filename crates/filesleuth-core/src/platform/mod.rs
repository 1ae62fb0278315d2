/// Platform-specific functionality — file mode inspection.

pub mod permissions;

pub use permissions::has_unusual_permissions;
