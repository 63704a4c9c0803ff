/// Version of the running server, managed as state.
#[derive(Debug, Clone, Copy)]
pub struct Version(pub &'static str);
