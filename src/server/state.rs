use crate::settings;
use crate::speech::Synthesizer;

#[derive(Clone)]
pub(crate) struct ServerState<S: Synthesizer> {
    pub(crate) settings: settings::Settings,
    pub(crate) synthesizer: S,
}
