use crate::utils::datamall_client::DatamallClient;

#[derive(Clone)]
pub struct AppState {
    pub datamall_client: DatamallClient,
}
