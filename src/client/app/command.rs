#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Wake the host up with a magic packet
    On,
    /// Ask the assistant on the host to put it to sleep
    Off,
    /// Tell whether the host is up
    Status,
}
