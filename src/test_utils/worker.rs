use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    Error,
    service_worker::{Notification, WindowClient, WorkerHost},
};

#[derive(Debug, Default)]
struct HostState {
    calls: Vec<&'static str>,
    shown: Vec<Notification>,
    closed: Vec<Notification>,
    clients: Vec<WindowClient>,
    focused: Vec<String>,
    opened: Vec<String>,
}

/// A service worker scope that records what the worker asks of it.
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingHost {
    state: Arc<Mutex<HostState>>,
}

impl RecordingHost {
    pub fn set_clients(&self, clients: Vec<WindowClient>) {
        self.state.lock().unwrap().clients = clients;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn shown(&self) -> Vec<Notification> {
        self.state.lock().unwrap().shown.clone()
    }

    pub fn closed(&self) -> Vec<Notification> {
        self.state.lock().unwrap().closed.clone()
    }

    pub fn focused(&self) -> Vec<String> {
        self.state.lock().unwrap().focused.clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.state.lock().unwrap().opened.clone()
    }
}

#[async_trait]
impl WorkerHost for RecordingHost {
    async fn skip_waiting(&self) -> Result<(), Error> {
        self.state.lock().unwrap().calls.push("skip_waiting");
        Ok(())
    }

    async fn claim_clients(&self) -> Result<(), Error> {
        self.state.lock().unwrap().calls.push("claim_clients");
        Ok(())
    }

    async fn show_notification(&self, notification: &Notification) -> Result<(), Error> {
        self.state.lock().unwrap().shown.push(notification.clone());
        Ok(())
    }

    async fn close_notification(&self, notification: &Notification) -> Result<(), Error> {
        self.state.lock().unwrap().closed.push(notification.clone());
        Ok(())
    }

    async fn window_clients(&self) -> Result<Vec<WindowClient>, Error> {
        Ok(self.state.lock().unwrap().clients.clone())
    }

    async fn focus(&self, client: &WindowClient) -> Result<(), Error> {
        self.state.lock().unwrap().focused.push(client.id.clone());
        Ok(())
    }

    async fn open_window(&self, url: &str) -> Result<(), Error> {
        self.state.lock().unwrap().opened.push(url.to_owned());
        Ok(())
    }
}
