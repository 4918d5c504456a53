/// Application service wiring every port the domain services need.
///
/// `llm_client` is the multimodal model (audio, OCR, scoring); `chat_client`
/// is the fast text/vision model used for planning and extraction.
#[derive(Clone)]
pub struct Service<P, LLM, IG, WS> {
    pub(crate) profile_repository: P,
    pub(crate) llm_client: LLM,
    pub(crate) chat_client: LLM,
    pub(crate) image_generator: IG,
    pub(crate) web_search: WS,
    pub(crate) search_results: u32,
}

impl<P, LLM, IG, WS> Service<P, LLM, IG, WS> {
    pub fn new(
        profile_repository: P,
        llm_client: LLM,
        chat_client: LLM,
        image_generator: IG,
        web_search: WS,
        search_results: u32,
    ) -> Self {
        Self {
            profile_repository,
            llm_client,
            chat_client,
            image_generator,
            web_search,
            search_results,
        }
    }
}

#[cfg(test)]
pub(crate) type MockedService = Service<
    crate::domain::profile::ports::MockProfileRepository,
    crate::domain::llm::ports::MockLLMClient,
    crate::domain::llm::ports::MockImageGenerator,
    crate::domain::llm::ports::MockWebSearchClient,
>;

#[cfg(test)]
impl MockedService {
    /// Every port starts without expectations, so any unplanned call panics
    pub(crate) fn mocked() -> Self {
        use crate::domain::{
            llm::ports::{MockImageGenerator, MockLLMClient, MockWebSearchClient},
            profile::ports::MockProfileRepository,
        };

        Service::new(
            MockProfileRepository::new(),
            MockLLMClient::new(),
            MockLLMClient::new(),
            MockImageGenerator::new(),
            MockWebSearchClient::new(),
            3,
        )
    }
}
