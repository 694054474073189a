//! Static page content.
//!
//! Everything the page displays lives here as `'static` literal data. Nothing
//! in this module is mutated at runtime; the page state in [`crate::page`]
//! only ever copies out of these tables.

use crate::icons::Icon;

/// Ids of the scrollable sections, in page order.
pub const SECTION_IDS: [&str; 6] = [
    "about",
    "performance",
    "experience",
    "interview",
    "vision",
    "contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    /// `#`-prefixed section id
    pub href: &'static str,
}

impl NavLink {
    /// The section id this link scrolls to, without the leading `#`.
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceMetric {
    pub label: &'static str,
    /// Already formatted for display, e.g. "300억+"
    pub value: &'static str,
    pub subtext: &'static str,
    pub long_description: Option<&'static str>,
    pub detail_points: Option<&'static [&'static str]>,
}

impl PerformanceMetric {
    /// Text shown when a metric carries no long-form detail of its own.
    pub fn fallback_text(&self) -> String {
        format!("{}에 대한 상세 데이터입니다.", self.subtext)
    }

    pub fn description(&self) -> String {
        match self.long_description {
            Some(description) => description.to_string(),
            None => self.fallback_text(),
        }
    }

    pub fn details(&self) -> Vec<String> {
        match self.detail_points {
            Some(points) => points.iter().map(|p| p.to_string()).collect(),
            None => vec![self.fallback_text()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterviewItem {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub context: &'static str,
    pub quote: &'static str,
    pub tags: &'static [&'static str],
}

/// One column of the career timeline in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub start_year: &'static str,
    pub end_year: Option<&'static str>,
    pub team: &'static str,
    pub period: &'static str,
    pub duties: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisionItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub text: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "About",
        href: "#about",
    },
    NavLink {
        name: "Performance",
        href: "#performance",
    },
    NavLink {
        name: "Experience",
        href: "#experience",
    },
    NavLink {
        name: "Interview",
        href: "#interview",
    },
    NavLink {
        name: "Vision",
        href: "#vision",
    },
    NavLink {
        name: "Contact",
        href: "#contact",
    },
];

pub const PERFORMANCE_METRICS: &[PerformanceMetric] = &[
    PerformanceMetric {
        label: "Cumulative Sales",
        value: "300억+",
        subtext: "5년 누적 개인 매출",
        long_description: Some("개인 매출 누적 300억+ (팀 매출 1,200억+)"),
        detail_points: Some(&[
            "연평균 60억 이상의 개인 매출 달성",
            "팀 전체 매출 1,200억 달성에 핵심적 기여",
            "시장 침체기에도 매년 목표 대비 110% 이상 초과 달성",
        ]),
    },
    PerformanceMetric {
        label: "New Clients",
        value: "218개",
        subtext: "신규 광고주 유치",
        long_description: Some("218개의 신규 대형 및 중소 광고주 직접 유치"),
        detail_points: Some(&[
            "산업군별 타겟팅 최적화로 신규 유입 경로 다각화",
            "초기 온보딩 프로세스 개선을 통한 계약 전환율 향상",
            "다양한 업종(F&B, 금융, 커머스 등)의 포트폴리오 확보",
        ]),
    },
    PerformanceMetric {
        label: "Leads Secured",
        value: "3,750건",
        subtext: "잠재 리드 확보",
        long_description: Some("영업 시스템 고도화를 통한 고품질 잠재 리드 확보"),
        detail_points: Some(&[
            "비대면 영업 시스템 <컨택어스> 리뉴얼로 인바운드 문의 급증",
            "데이터 기반 리드 스코어링 도입으로 영업 효율 극대화",
            "마케팅 자동화 툴 활용 리드 너처링(Nurturing) 체계 구축",
        ]),
    },
    PerformanceMetric {
        label: "Team Efficiency",
        value: "300%",
        subtext: "생산성 향상 기여",
        long_description: Some(
            "영업 대시보드 및 자동화 시스템 구축으로 팀 생산성 3배 향상",
        ),
        detail_points: Some(&[
            "수기 집계 프로세스 자동화로 관리 업무 시간 90% 절감",
            "실시간 실적 시각화로 팀 내 데이터 기반 의사결정 문화 정착",
            "표준 영업 가이드 보급으로 신입 인력 교육 기간 60% 단축",
        ]),
    },
];

pub const CAREER_HISTORY: &[CareerItem] = &[
    CareerItem {
        id: 1,
        title: "신규 영업 시스템 및 조직 구축 (Agile TF)",
        description: "비대면 영업 시스템 <컨택어스> 신규 구축 및 아웃바운드 세일즈 확장",
        points: &[
            "폐쇄형 시스템을 오픈형으로 신규 구축하여 인바운드 리드 구조화 (기여도 100%)",
            "퍼포먼스 마케팅 기반의 리드 수집 퍼널 설계로 문의량 230% 증가",
        ],
    },
    CareerItem {
        id: 2,
        title: "상품 기획 및 비즈니스 모델 혁신",
        description: "업계 선도적 광고 상품 및 모델 개발",
        points: &[
            "AI 광고 영상 제작 상품 기획으로 2026 서울영상광고제 수상",
            "TV 광고 성과연동형 R/S 모델 도입 (업계 최초)",
            "세로형 TV 배너(매출 400% 증대) 및 유튜브 쇼츠 DA 상품 최초 사례 구축",
        ],
    },
    CareerItem {
        id: 3,
        title: "프로세스 고도화 및 표준화",
        description: "영업 효율성 극대화를 위한 가이드 및 대시보드 구축",
        points: &[
            "광고주 비기너 가이드 제작으로 온보딩 단축 (3주→1주) 및 전환율 향상 (25%→42%)",
            "실시간 영업 현황 대시보드 구축으로 매출 집계 시간 99% 단축",
        ],
    },
];

/// Exactly three records; the interview section binds them to its three
/// layouts by position.
pub const INTERVIEW_DATA: [InterviewItem; 3] = [
    InterviewItem {
        id: 1,
        name: "홍OO 팀장님",
        role: "영업기획팀",
        context: "신입 시절 함께한 팀장의 이야기",
        quote: "\"신입 때부터 똑같은 업무를 줘도 세영프로는 늘 다르게 일했어. 신입은 주어진 업무를 잘해내는 것 만으로도 인정을 받을 수 있는데, 세영프로는 거기에 한 수 더해서 늘 새로운 아이디어까지 자발적으로 들고오더라구. 내 기억에 남는 몇 안되는 사원 중 하나야.\"",
        tags: &["#자발적몰입", "#기획력", "#남다른디테일"],
    },
    InterviewItem {
        id: 2,
        name: "박OO 차장님",
        role: "IT개발팀",
        context: "비대면 영업 시스템 개발을 함께한 개발자 이야기",
        quote: "\"10년 넘게 아무도 고치자고 하지 않은 시스템을, 처음으로 뜯어 고치자고 당돌하게 말한 사람이지. 처음엔 '왜 저렇게 사서 고생인가'했는데, 들어보니 맞는 말이더라구. 덕분에 나도 디자인까지 직접하면서 개발했던(고생했던) 좋은 경험이었어.\"",
        tags: &["#문제해결", "#돌파력", "#협업전문가"],
    },
    InterviewItem {
        id: 3,
        name: "이OO 이사님",
        role: "치킨브랜드 A사 광고주",
        context: "2025년 캠페인을 함께한 광고주 이야기",
        quote: "\"처음부터 광고를 할 생각은 없었어요. TV광고 비싸다고만 생각했거든요. 근데 제가 필요한 작은 부분부터 해결해주시면서, 결국 설득됐습니다. SBS가 아닌데도, 나서서 다른 매체까지 플래닝해주셔서 감사했어요.\"",
        tags: &["#비즈니스파트너", "#신뢰기반영업", "#토탈솔루션"],
    },
];

pub const CAREER_TIMELINE: [TimelineEntry; 2] = [
    TimelineEntry {
        start_year: "2017",
        end_year: None,
        team: "영업기획팀 (광고전략팀), 4년",
        period: "2017 - 2020",
        duties: &[
            "광고 시장 및 미디어 콘텐츠 분석",
            "재원 관리 및 정기/상시 판매 가이드 셋팅",
            "신유형 상품 기획",
            "판매 시스템 개선",
        ],
    },
    TimelineEntry {
        start_year: "2021",
        end_year: Some("2025"),
        team: "신규영업팀 (AGILE TF), 5년~ING",
        period: "2021 - PRESENT",
        duties: &[
            "신규 영업 조직 창립 (AGILE TF로 촉발)",
            "인/아웃바운드 세일즈 체계 구축",
            "광고주 통합 매체 플래닝 제안, 세일즈 주력",
            "캠페인 운영 및 성과 관리",
        ],
    },
];

pub const ABOUT_TAGS: &[&str] = &["#돌파력", "#구조화", "#매출성과"];

pub const ABOUT_SUMMARY: &str = "광고 상품 및 영업 전략 '기획' 업무로 커리어 시작하여, 직접 설계한 비대면 영업시스템을 계기로 2인 TF 참여, 연 매출 300억 규모의 10인 팀 성장에 기여했습니다.";

pub const VISION_ITEMS: [VisionItem; 3] = [
    VisionItem {
        title: "Scale-up System",
        description: "B2B 리드 생성 영업 시스템의 고도화",
        icon: Icon::TrendingUp,
    },
    VisionItem {
        title: "Verification of Data",
        description: "주문 데이터 기반의 마케팅 성과 입증",
        icon: Icon::Target,
    },
    VisionItem {
        title: "Consulting Partner",
        description: "구매 맥락을 장악하는 데이터 솔루션 파트너",
        icon: Icon::Rocket,
    },
];

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: Icon::Mail,
        text: "yg00188@gmail.com",
    },
    ContactChannel {
        icon: Icon::Phone,
        text: "010.7590.8883",
    },
    ContactChannel {
        icon: Icon::Instagram,
        text: "@libby.230",
    },
];

pub const PORTRAIT_URL: &str = "https://github.com/libby230/Lee-se-young/blob/77ed9d2b38340e73e2e76b1eb7d356b83ceb2a8f/unnamed.jpg?raw=true";
pub const PORTRAIT_FALLBACK_URL: &str = "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=1000&auto=format&fit=crop";
pub const VISION_IMAGE_URL: &str = "https://picsum.photos/seed/baemin/800/800";

/// Image source to switch to after `current` failed to load.
///
/// Only the primary portrait has a fallback, so a failing fallback never
/// triggers a second swap.
pub fn portrait_fallback(current: &str) -> Option<&'static str> {
    if current == PORTRAIT_FALLBACK_URL {
        None
    } else {
        Some(PORTRAIT_FALLBACK_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_sections() {
        for link in NAV_LINKS {
            assert!(
                SECTION_IDS.contains(&link.section_id()),
                "{} has no section",
                link.href
            );
        }
        assert_eq!(NAV_LINKS.len(), SECTION_IDS.len());
    }

    #[test]
    fn career_ids_are_unique() {
        let mut ids = CAREER_HISTORY.iter().map(|c| c.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CAREER_HISTORY.len());

        let mut ids = INTERVIEW_DATA.iter().map(|i| i.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn metric_with_details_uses_them() {
        let metric = &PERFORMANCE_METRICS[1];
        assert_eq!(
            metric.description(),
            "218개의 신규 대형 및 중소 광고주 직접 유치"
        );
        assert_eq!(metric.details().len(), 3);
        assert_eq!(
            metric.details()[0],
            "산업군별 타겟팅 최적화로 신규 유입 경로 다각화"
        );
    }

    #[test]
    fn metric_without_details_falls_back_to_subtext() {
        let metric = PerformanceMetric {
            label: "Awards",
            value: "2회",
            subtext: "광고제 수상",
            long_description: None,
            detail_points: None,
        };
        let fallback = "광고제 수상에 대한 상세 데이터입니다.";
        assert_eq!(metric.description(), fallback);
        assert_eq!(metric.details(), vec![fallback.to_string()]);
    }

    #[test]
    fn metric_fallback_branches_are_independent() {
        let metric = PerformanceMetric {
            label: "Awards",
            value: "2회",
            subtext: "광고제 수상",
            long_description: Some("서울영상광고제 수상"),
            detail_points: None,
        };
        assert_eq!(metric.description(), "서울영상광고제 수상");
        assert_eq!(
            metric.details(),
            vec!["광고제 수상에 대한 상세 데이터입니다.".to_string()]
        );
    }

    #[test]
    fn portrait_falls_back_once() {
        assert_eq!(portrait_fallback(PORTRAIT_URL), Some(PORTRAIT_FALLBACK_URL));
        assert_eq!(portrait_fallback(PORTRAIT_FALLBACK_URL), None);
    }
}
