//! Room list and visibility handlers

use parley_core::RoomStatusChange;
use tracing::info;

use super::{Dispatch, Dispatcher, ReplySource};
use crate::render::ViewUpdate;

impl<R: ReplySource> Dispatcher<R> {
    pub(super) fn on_public_rooms(&mut self, codes: Vec<String>, out: &mut Dispatch) {
        for code in self.state.rooms.record_public_rooms(codes) {
            out.update(ViewUpdate::PublicRoomAdded(code));
        }
        out.update(ViewUpdate::RoomStatus(self.state.rooms.status()));
    }

    pub(super) fn on_status_changed(&mut self, change: &RoomStatusChange, out: &mut Dispatch) {
        let outcome = self.state.rooms.apply_status_change(change);
        if let Some(status) = outcome.indicator {
            info!(room_code = %change.room_code, %status, "Active room visibility changed");
            out.update(ViewUpdate::RoomStatus(status));
        }
        if outcome.added {
            out.update(ViewUpdate::PublicRoomAdded(change.room_code.clone()));
        }
        if outcome.removed {
            out.update(ViewUpdate::PublicRoomRemoved(change.room_code.clone()));
        }
    }
}
