//! Built-in portal content: slides, navigation table, and pages.

use crate::carousel::Slide;
use crate::navigation::{NavEntry, SubItem};
use crate::router::{Button, Card, Page, HOME};

pub const PORTAL_NAME: &str = "University Student Portal";
pub const INSTITUTION: &str = "Rice University";

/// Entry on the landing page's Quick Links row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLink {
    pub title: &'static str,
    pub description: &'static str,
    pub path: Option<&'static str>,
}

pub static QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        title: "Degree Works",
        description: "View your degree progress and requirements",
        path: None,
    },
    QuickLink {
        title: "Grades",
        description: "View your grades and academic performance",
        path: Some("/academics/grades"),
    },
    QuickLink {
        title: "Payment Suite",
        description: "View your financial information and pay your bills",
        path: None,
    },
];

/// The five top-level sections: (title, description, path).
static SECTIONS: &[(&str, &str, &str)] = &[
    (
        "Academics",
        "Access grades, transcripts, and degree/graduation progress",
        "/academics",
    ),
    (
        "Registration",
        "Register for classes, view your schedule, and plan your courses",
        "/registration",
    ),
    (
        "Finances",
        "View your financial information and pay your bills",
        "/finances",
    ),
    (
        "Personal Information",
        "View your personal information and settings",
        "/personal",
    ),
    (
        "Resources",
        "Access academic resources, support services, and more",
        "/resources",
    ),
];

pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::text(
            "Welcome to Esther",
            "Grades, registration, billing and campus services in one place.",
        ),
        Slide::rows(
            "Spring Registration",
            &[
                ("Nov 3", "Registration opens for seniors"),
                ("Nov 5", "Registration opens for juniors"),
                ("Nov 7", "Registration opens for sophomores"),
                ("Nov 10", "Registration opens for freshmen"),
            ],
        ),
        Slide::rows(
            "Tuition & Fees",
            &[
                ("Dec 1", "Spring bill posted"),
                ("Jan 2", "Payment due"),
                ("Jan 15", "Late fee assessed"),
            ],
        ),
        Slide::rows(
            "Academic Calendar",
            &[
                ("Nov 26", "Thanksgiving break begins"),
                ("Dec 5", "Last day of classes"),
                ("Dec 9", "Final exams begin"),
            ],
        ),
        Slide::text(
            "Health & Wellness",
            "Counseling and health services are open to all students. Visit Resources to learn more.",
        ),
    ]
}

pub fn default_nav() -> Vec<NavEntry> {
    vec![
        NavEntry {
            label: "Academics".into(),
            path: "/academics".into(),
            sub_items: vec![
                SubItem::link("Grades", "/academics/grades"),
                SubItem::link("Classes", "/academics/classes"),
                SubItem::link("Degree", "/academics/degree"),
                SubItem::placeholder("Graduation", "graduation"),
            ],
        },
        NavEntry {
            label: "Registration".into(),
            path: "/registration".into(),
            sub_items: vec![
                SubItem::placeholder("Register for Classes", "register-for-classes"),
                SubItem::placeholder("View Schedule", "view-schedule"),
                SubItem::placeholder("Plan Ahead", "plan-ahead"),
                SubItem::placeholder("Course Catalog", "course-catalog"),
                SubItem::placeholder("Registration Timeline", "registration-timeline"),
            ],
        },
        NavEntry {
            label: "Finances".into(),
            path: "/finances".into(),
            sub_items: vec![
                SubItem::placeholder("Bill Payment Suite", "bill-payment-suite"),
                SubItem::placeholder("Financial Aid", "financial-aid"),
            ],
        },
        NavEntry {
            label: "Personal Information".into(),
            path: "/personal".into(),
            sub_items: vec![
                SubItem::placeholder("Student Profile", "student-profile"),
                SubItem::placeholder(
                    "Parent/Guardian and Emergency Contact Information",
                    "emergency-contacts",
                ),
                SubItem::placeholder("Name Pronunciation", "name-pronunciation"),
                SubItem::placeholder("Manage Directory Information", "manage-directory-information"),
                SubItem::placeholder("E-Questionnaires", "e-questionnaires"),
            ],
        },
        NavEntry {
            label: "Resources".into(),
            path: "/resources".into(),
            sub_items: vec![
                SubItem::placeholder("Academic Resources", "academic-resources"),
                SubItem::placeholder("Student Life", "student-life"),
                SubItem::placeholder("Housing and Dining", "housing-and-dining"),
                SubItem::placeholder("Emergency Services", "emergency-services"),
                SubItem::placeholder("CLIC", "clic"),
            ],
        },
    ]
}

fn page(path: &str, title: &str, description: &str, parent: &str, cards: Vec<Card>) -> Page {
    Page {
        path: path.into(),
        title: title.into(),
        description: description.into(),
        parent: Some(parent.into()),
        cards,
    }
}

fn placeholder_card(title: &str, description: &str, buttons: &[(&str, &str)]) -> Card {
    Card::new(
        title,
        description,
        buttons
            .iter()
            .map(|(label, action)| Button::placeholder(label, action))
            .collect(),
    )
}

pub fn default_pages() -> Vec<Page> {
    let landing = Page {
        path: HOME.into(),
        title: "Welcome to Esther".into(),
        description: "Your central hub for academic resources, services, and information".into(),
        parent: None,
        cards: SECTIONS
            .iter()
            .map(|(title, description, path)| {
                Card::new(title, description, vec![Button::link("Open", path)])
            })
            .collect(),
    };

    vec![
        landing,
        page(
            "/academics",
            "Academics",
            SECTIONS[0].1,
            HOME,
            vec![
                Card::new(
                    "Grades",
                    "Access your current and past course grades",
                    vec![Button::link("View Grades", "/academics/grades")],
                ),
                Card::new(
                    "Classes",
                    "View your class information and course details",
                    vec![Button::link("View Classes", "/academics/classes")],
                ),
                Card::new(
                    "Degree",
                    "Track your progress toward graduation",
                    vec![Button::link("View Degree", "/academics/degree")],
                ),
                placeholder_card(
                    "Graduation",
                    "View graduation requirements and status",
                    &[("View Information", "graduation-info")],
                ),
            ],
        ),
        page(
            "/academics/grades",
            "Grades",
            "View your current and past course grades",
            "/academics",
            vec![
                placeholder_card(
                    "View Grades",
                    "View your grades for the current term",
                    &[("View Grades", "view-grades")],
                ),
                placeholder_card(
                    "Unofficial Transcript",
                    "View an unofficial transcript of your grades",
                    &[("View Unofficial Transcript", "unofficial-transcript")],
                ),
                placeholder_card(
                    "Official Transcript",
                    "Request an official transcript of your grades and/or view request status",
                    &[("Request or View Status", "official-transcript")],
                ),
            ],
        ),
        page(
            "/academics/classes",
            "Classes",
            "View your class information and course details",
            "/academics",
            vec![
                placeholder_card(
                    "Course/Instructor Evaluations",
                    "Evaluate your courses and instructors and view results",
                    &[
                        ("Evaluate Courses/Instructors", "evaluate-courses"),
                        ("View Results", "evaluation-results"),
                    ],
                ),
                placeholder_card(
                    "Pass/Fail",
                    "View and change your pass/fail status for a course",
                    &[
                        ("Designate Pass/Fail", "designate-pass-fail"),
                        ("View Pass/Fail Status", "pass-fail-status"),
                    ],
                ),
            ],
        ),
        page(
            "/academics/degree",
            "Degree",
            "Track your degree progress and requirements",
            "/academics",
            vec![
                placeholder_card(
                    "Degree Works",
                    "Track your progress toward your degree",
                    &[("View Degree Works", "degree-works")],
                ),
                placeholder_card(
                    "Degrees, Majors, Minors, and Certificates",
                    "View requirements for your degrees, majors, minors, and certificates",
                    &[(
                        "View Degrees, Majors, Minors, and Certificates",
                        "degree-requirements",
                    )],
                ),
                placeholder_card(
                    "Enrollment/Degree Verification",
                    "View or request your enrollment and degree verification",
                    &[
                        ("View Enrollment/Degree Verification", "view-verification"),
                        ("Request Enrollment/Degree Verification", "request-verification"),
                        ("National Student Clearinghouse", "clearinghouse"),
                        ("CeCredentials", "cecredentials"),
                    ],
                ),
            ],
        ),
        page(
            "/registration",
            "Registration",
            SECTIONS[1].1,
            HOME,
            vec![
                placeholder_card(
                    "Register for Classes",
                    "Add or drop classes for the current term",
                    &[("Register", "register-for-classes")],
                ),
                placeholder_card(
                    "View Schedule",
                    "View your current class schedule",
                    &[("View Schedule", "view-schedule")],
                ),
                placeholder_card(
                    "Plan Ahead",
                    "Plan your courses for upcoming terms",
                    &[("Plan Courses", "plan-ahead")],
                ),
                placeholder_card(
                    "Course Catalog",
                    "Browse available courses and course descriptions",
                    &[("Browse Catalog", "course-catalog")],
                ),
                placeholder_card(
                    "Registration Timeline",
                    "View important registration dates and deadlines",
                    &[("View Timeline", "registration-timeline")],
                ),
            ],
        ),
        page(
            "/finances",
            "Finances",
            SECTIONS[2].1,
            HOME,
            vec![
                placeholder_card(
                    "View Bill",
                    "View your current tuition and fee statement",
                    &[("View Bill", "view-bill")],
                ),
                placeholder_card(
                    "Make Payment",
                    "Pay your tuition and fees online",
                    &[("Pay Now", "make-payment")],
                ),
                placeholder_card(
                    "Financial Aid",
                    "View your financial aid status and awards",
                    &[("View Aid", "financial-aid")],
                ),
                placeholder_card(
                    "Payment History",
                    "View your past payment transactions",
                    &[("View History", "payment-history")],
                ),
                placeholder_card(
                    "Scholarships",
                    "View available scholarships and your applications",
                    &[("View Scholarships", "scholarships")],
                ),
            ],
        ),
        page(
            "/personal",
            "Personal Information",
            SECTIONS[3].1,
            HOME,
            vec![
                placeholder_card(
                    "Student Profile",
                    "View and update your personal information",
                    &[("View Profile", "student-profile")],
                ),
                placeholder_card(
                    "Parent/Guardian and Emergency Contact Information",
                    "Update your parent/guardian and emergency contact information",
                    &[(
                        "Update Parent/Guardian and Emergency Contacts",
                        "emergency-contacts",
                    )],
                ),
                placeholder_card(
                    "Name Pronunciation",
                    "Update your name pronunciation preferences",
                    &[("Update Name Pronunciation", "name-pronunciation")],
                ),
                placeholder_card(
                    "Manage Directory Information",
                    "Manage your directory and privacy preferences",
                    &[("Manage Directory Information", "directory-information")],
                ),
                placeholder_card(
                    "E-Questionnaires",
                    "View and complete your e-questionnaires",
                    &[("View E-Questionnaires", "e-questionnaires")],
                ),
            ],
        ),
        page(
            "/resources",
            "Resources",
            SECTIONS[4].1,
            HOME,
            vec![
                placeholder_card(
                    "Library Resources",
                    "Access library databases, books, and research tools",
                    &[("Library Services", "library")],
                ),
                placeholder_card(
                    "Academic Support",
                    "Tutoring, study groups, and academic assistance",
                    &[("Get Support", "academic-support")],
                ),
                placeholder_card(
                    "Career Services",
                    "Career counseling, job search, and internship resources",
                    &[("Career Center", "career-center")],
                ),
                placeholder_card(
                    "Health & Wellness",
                    "Student health services and counseling resources",
                    &[("Health Services", "health-services")],
                ),
                placeholder_card(
                    "Housing & Dining",
                    "Housing information and dining services",
                    &[("Housing Info", "housing")],
                ),
                placeholder_card(
                    "Student Organizations",
                    "Browse and join student clubs and organizations",
                    &[("View Organizations", "student-organizations")],
                ),
            ],
        ),
    ]
}
