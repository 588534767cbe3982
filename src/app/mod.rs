mod callbacks;
mod server;
mod state;

pub use {
    callbacks::{
        CALLBACK_GRAPH, CURRENT_ENDPOINT, Callback, CallbackGraph, HISTORY_ENDPOINT, InputId,
        OutputId, update_current_preds, update_history,
    },
    server::{AppError, router, serve},
    state::{DashboardState, Selection},
};
