//! # WhoToDate 测评 - Trait 定义
//!
//! 题库提供者与评分器接口。调用方通过泛型参数注入具体实现，
//! 不依赖模块级全局状态。

use crate::error::ScoringError;
use crate::types::*;

/// 题库提供者 Trait
///
/// 题库（题目、选项与权重表）是带版本的固定数据集，
/// 任何修改都会改变评分语义，必须提升版本号。
pub trait QuestionBank {
    /// 题库版本
    fn version() -> u8;

    /// 全部题目（按 ID 升序）
    fn questions() -> &'static [Question];

    /// 维度的选项权重表（按选项索引）
    fn weights(label: TraitLabel) -> Option<&'static [Score]>;

    /// 按 ID 获取题目
    fn question(id: QuestionId) -> Option<&'static Question> {
        Self::questions().iter().find(|q| q.id == id)
    }
}

/// 兼容性评分器 Trait
pub trait CompatibilityScorer {
    /// 由答卷生成兼容性画像
    fn score_quiz(answers: &QuizAnswerSet) -> Result<CompatibilityProfile, ScoringError>;

    /// 对比两份画像
    fn compare_profiles(
        a: &CompatibilityProfile,
        b: &CompatibilityProfile,
    ) -> Result<CompatibilitySummary, ScoringError>;
}
