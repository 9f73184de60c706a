use crate::registry::Registry;

const DEMO_EMPLOYEES: &[(&str, &[&str])] = &[
    (
        "山田太郎",
        &["プロジェクト管理", "リーダーシップ", "コミュニケーション"],
    ),
    ("佐藤花子", &["データ分析", "プログラミング", "問題解決"]),
];

const DEMO_JOB_ROLES: &[(&str, &[&str])] = &[
    (
        "プロジェクトマネージャー",
        &["プロジェクト管理", "リーダーシップ", "コミュニケーション"],
    ),
    (
        "データサイエンティスト",
        &["データ分析", "プログラミング", "統計学"],
    ),
];

/// Registry pre-filled with the demo employees and job roles the dashboard
/// opens with.
pub fn demo_registry() -> Registry {
    Registry::from_records(DEMO_EMPLOYEES, DEMO_JOB_ROLES)
}
