/// Initial-state probe of the connectivity monitor.
///
/// Online/offline transitions are delivered to the session as events.
pub trait ConnectivityGateway {
    fn is_online(&self) -> bool;
}

impl<T: ConnectivityGateway + ?Sized> ConnectivityGateway for &T {
    fn is_online(&self) -> bool {
        (**self).is_online()
    }
}
