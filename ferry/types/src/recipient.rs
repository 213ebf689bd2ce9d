use crate::{ChainId, Event, FerryResult, Route};

/// Implemented by anything that can take delivery of a payload from the
/// messaging layer.
pub trait Recipient {
    /// Handle a payload arriving from a remote chain.
    ///
    /// `src_route` describes the path the payload traveled, as seen from the
    /// receiving end: the sender's address on `src_chain_id`, paired with the
    /// local address it targeted. Implementations decide whether that path is
    /// trusted; the messaging layer makes no promises about the sender.
    fn receive_payload(
        &mut self,
        src_chain_id: ChainId,
        src_route: Route,
        payload: &[u8],
    ) -> FerryResult<Vec<Event>>;
}
