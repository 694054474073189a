//! Transient page state: which detail overlay is open and the draft contact
//! message, plus the transitions the page's click and submit handlers drive.

use std::sync::Arc;

use thiserror::Error;

use crate::content::{CareerItem, PERFORMANCE_METRICS};

pub const CONTACT_RECIPIENT: &str = "yg00188@gmail.com";
pub const CONTACT_SUBJECT: &str = "[Portfolio] 이세영 프로님께 드리는 제안";
pub const EMPTY_MESSAGE_WARNING: &str = "메시지를 입력해주세요.";

/// Hands a URI to whatever handles it outside the page (the mail client for
/// `mailto:` links). Nothing is reported back.
pub type ExternalHandoff = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Contact message is empty")]
    EmptyMessage,
    #[error("No section with id `{0}`")]
    SectionNotFound(String),
    #[error("No performance metric at index {0}")]
    UnknownMetric(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Experience,
    Performance,
    Vision,
    Interview,
}

impl OverlayKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayKind::Experience => "experience",
            OverlayKind::Performance => "performance",
            OverlayKind::Vision => "vision",
            OverlayKind::Interview => "interview",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayContent {
    pub kind: OverlayKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    active_overlay: Option<OverlayContent>,
    contact_message: String,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_overlay(&self) -> Option<&OverlayContent> {
        self.active_overlay.as_ref()
    }

    pub fn contact_message(&self) -> &str {
        &self.contact_message
    }

    pub fn open_performance_detail(&mut self, index: usize) -> Result<(), PageError> {
        let metric = PERFORMANCE_METRICS
            .get(index)
            .ok_or(PageError::UnknownMetric(index))?;
        self.active_overlay = Some(OverlayContent {
            kind: OverlayKind::Performance,
            title: metric.label.to_string(),
            subtitle: Some(metric.value.to_string()),
            description: metric.description(),
            details: metric.details(),
        });
        Ok(())
    }

    pub fn open_experience_detail(&mut self, item: &CareerItem) {
        self.active_overlay = Some(OverlayContent {
            kind: OverlayKind::Experience,
            title: item.title.to_string(),
            subtitle: None,
            description: item.description.to_string(),
            details: item.points.iter().map(|p| p.to_string()).collect(),
        });
    }

    pub fn close_overlay(&mut self) {
        self.active_overlay = None;
    }

    pub fn update_contact_message(&mut self, text: impl Into<String>) {
        self.contact_message = text.into();
    }

    /// Sends the draft to the mail client through `handoff`.
    ///
    /// A blank draft is rejected before anything is handed off. On success the
    /// `mailto:` URI that was handed off is returned.
    pub fn submit_contact_message(&self, handoff: &dyn Fn(&str)) -> Result<String, PageError> {
        if self.contact_message.trim().is_empty() {
            return Err(PageError::EmptyMessage);
        }
        let uri = mailto_uri(&self.contact_message);
        handoff(&uri);
        Ok(uri)
    }
}

pub fn mailto_uri(body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        CONTACT_RECIPIENT,
        urlencoding::encode(CONTACT_SUBJECT),
        urlencoding::encode(body)
    )
}

/// [`ExternalHandoff`] that navigates the current page to the URI.
pub fn browser_handoff() -> ExternalHandoff {
    Arc::new(|uri: &str| {
        #[cfg(feature = "hydrate")]
        {
            if leptos::prelude::window().location().set_href(uri).is_err() {
                log::warn!("couldn't hand off {uri}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = uri;
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::CAREER_HISTORY;

    fn recording_handoff() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str)) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |uri: &str| sink.lock().unwrap().push(uri.to_string()))
    }

    #[test]
    fn performance_overlay_matches_metric() {
        for (i, metric) in PERFORMANCE_METRICS.iter().enumerate() {
            let mut state = PageState::new();
            state.open_performance_detail(i).unwrap();
            let overlay = state.active_overlay().unwrap();
            assert_eq!(overlay.kind, OverlayKind::Performance);
            assert_eq!(overlay.title, metric.label);
            assert_eq!(overlay.subtitle.as_deref(), Some(metric.value));
        }
    }

    #[test]
    fn new_clients_overlay() {
        let mut state = PageState::new();
        let index = PERFORMANCE_METRICS
            .iter()
            .position(|m| m.label == "New Clients")
            .unwrap();
        state.open_performance_detail(index).unwrap();

        let overlay = state.active_overlay().unwrap();
        assert_eq!(overlay.title, "New Clients");
        assert_eq!(overlay.subtitle.as_deref(), Some("218개"));
        assert_eq!(
            overlay.details,
            vec![
                "산업군별 타겟팅 최적화로 신규 유입 경로 다각화".to_string(),
                "초기 온보딩 프로세스 개선을 통한 계약 전환율 향상".to_string(),
                "다양한 업종(F&B, 금융, 커머스 등)의 포트폴리오 확보".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_metric_leaves_state_alone() {
        let mut state = PageState::new();
        state.open_experience_detail(&CAREER_HISTORY[0]);
        let before = state.clone();

        let res = state.open_performance_detail(PERFORMANCE_METRICS.len());
        assert_eq!(res, Err(PageError::UnknownMetric(PERFORMANCE_METRICS.len())));
        assert_eq!(state, before);
    }

    #[test]
    fn experience_overlay_keeps_point_order() {
        for item in CAREER_HISTORY {
            let mut state = PageState::new();
            state.open_experience_detail(item);
            let overlay = state.active_overlay().unwrap();
            assert_eq!(overlay.kind, OverlayKind::Experience);
            assert_eq!(overlay.title, item.title);
            assert_eq!(overlay.subtitle, None);
            assert_eq!(overlay.details, item.points);
        }
    }

    #[test]
    fn overlay_kinds_cover_every_category() {
        let kinds = [
            OverlayKind::Experience,
            OverlayKind::Performance,
            OverlayKind::Vision,
            OverlayKind::Interview,
        ];
        assert_eq!(
            kinds.map(OverlayKind::as_str),
            ["experience", "performance", "vision", "interview"]
        );
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = PageState::new();
        state.close_overlay();
        assert_eq!(state, PageState::new());

        state.update_contact_message("draft");
        state.open_performance_detail(0).unwrap();
        state.close_overlay();
        let closed = state.clone();
        state.close_overlay();
        assert_eq!(state, closed);
        assert!(state.active_overlay().is_none());
        assert_eq!(state.contact_message(), "draft");
    }

    #[test]
    fn contact_message_is_stored_verbatim() {
        let mut state = PageState::new();
        state.update_contact_message("  hi there \n");
        assert_eq!(state.contact_message(), "  hi there \n");
    }

    #[test]
    fn blank_message_is_never_handed_off() {
        for draft in ["", "   ", "\n\t "] {
            let (seen, handoff) = recording_handoff();
            let mut state = PageState::new();
            state.update_contact_message(draft);
            assert_eq!(
                state.submit_contact_message(&handoff),
                Err(PageError::EmptyMessage)
            );
            assert!(seen.lock().unwrap().is_empty());
        }
    }

    #[test]
    fn message_is_handed_off_as_mailto() {
        let (seen, handoff) = recording_handoff();
        let mut state = PageState::new();
        state.update_contact_message("Hello");

        let uri = state.submit_contact_message(&handoff).unwrap();
        assert_eq!(seen.lock().unwrap().as_slice(), [uri.clone()]);
        assert!(uri.starts_with("mailto:yg00188@gmail.com?subject="));
        assert!(uri.ends_with("&body=Hello"));
    }

    #[test]
    fn mailto_fields_are_percent_encoded() {
        let uri = mailto_uri("커피챗 & 제안?\n감사합니다");
        let (_, query) = uri.split_once('?').unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(query.starts_with("subject=%5BPortfolio%5D%20"));
        assert!(query.contains("%20%26%20"));
        assert!(query.contains("%3F%0A"));
        assert_eq!(query.matches('&').count(), 1);
    }
}
