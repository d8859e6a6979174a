//! # WhoToDate 测评 - 兼容性评分引擎
//!
//! 本 crate 把一份答卷确定性地映射为兼容性画像，并对两份画像做双人对比。
//!
//! ## 功能概述
//!
//! - **答卷校验**：空答卷、未知题目、选项越界
//! - **人格与情商**：加权平均，未作答维度为中性分 50
//! - **依恋类型**：按选项记分，平局按 安全 > 焦虑 > 回避 > 恐惧
//! - **四字母类型**：逐轴多数表决，平局取 I / N / F / J
//! - **风险颜色**：依恋、情商、情绪平衡加权
//! - **双人对比**：依恋组合、人格契合、情商
//!
//! ## 风险值权重
//!
//! | 维度 | 权重 |
//! |------|------|
//! | 依恋风险 | 40% |
//! | 情商缺口 | 30% |
//! | 情绪平衡 | 30% |
//!
//! ## 双人对比权重
//!
//! | 维度 | 权重 |
//! |------|------|
//! | 依恋组合 | 40% |
//! | 人格契合 | 35% |
//! | 情商 | 25% |
//!
//! ## 使用方式
//!
//! ```ignore
//! let answers: QuizAnswerSet = [(1, 0), (11, 2)].into_iter().collect();
//! let profile = quiz_scoring::score_quiz(&answers)?;
//! let summary = quiz_scoring::compare_profiles(&profile, &other)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod attachment;
pub mod bank;
pub mod compare;
pub mod insights;
pub mod personality;
pub mod risk;
pub mod tables;
pub mod type_indicator;
pub mod validation;


use core::marker::PhantomData;

use frame_support::traits::{ConstU32, Get};
use quiz_common::{
    CompatibilityProfile, CompatibilityScorer, CompatibilitySummary, QuestionBank, QuizAnswerSet,
    ScoringError, StrengthsWeaknesses,
};

pub use bank::{StandardBank, BANK_VERSION, QUESTION_COUNT};
pub use validation::AnsweredQuestion;

/// 评分引擎配置
pub trait ScoringConfig {
    /// 题库
    type Bank: QuestionBank;

    /// 画像中最多的优势条目
    type MaxStrengths: Get<u32>;

    /// 画像中最多的挑战条目
    type MaxChallenges: Get<u32>;

    /// 画像中最多的理想伴侣特质
    type MaxPartnerTraits: Get<u32>;
}

/// 默认配置：标准题库，优势/挑战各 3 条，伴侣特质 5 条
pub struct DefaultScoringConfig;

impl ScoringConfig for DefaultScoringConfig {
    type Bank = StandardBank;
    type MaxStrengths = ConstU32<{ tables::DEFAULT_MAX_STRENGTHS }>;
    type MaxChallenges = ConstU32<{ tables::DEFAULT_MAX_CHALLENGES }>;
    type MaxPartnerTraits = ConstU32<{ tables::DEFAULT_MAX_PARTNER_TRAITS }>;
}

/// 兼容性评分引擎
///
/// 无状态，所有输入通过参数传入，相同输入总是得到相同输出。
pub struct ScoringEngine<C: ScoringConfig = DefaultScoringConfig>(PhantomData<C>);

impl<C: ScoringConfig> CompatibilityScorer for ScoringEngine<C> {
    fn score_quiz(answers: &QuizAnswerSet) -> Result<CompatibilityProfile, ScoringError> {
        let answered = validation::validate_answers::<C::Bank>(answers)?;

        let personality_traits = personality::score_personality_traits::<C::Bank>(&answered);
        let emotional_intelligence = personality::score_emotional_intelligence::<C::Bank>(&answered);
        let attachment_style = attachment::score_attachment(&answered);
        let type_indicator = type_indicator::score_type_indicator(&answered);

        let risk_score = risk::risk_score(attachment_style, &personality_traits, &emotional_intelligence);
        let color = risk::classify_risk(risk_score);

        let strengths_weaknesses = StrengthsWeaknesses {
            strengths: insights::strengths(
                &personality_traits,
                &emotional_intelligence,
                C::MaxStrengths::get() as usize,
            ),
            challenges: insights::challenges(
                &personality_traits,
                &emotional_intelligence,
                C::MaxChallenges::get() as usize,
            ),
            ideal_partner_traits: insights::ideal_partner_traits(
                attachment_style,
                &answered,
                C::MaxPartnerTraits::get() as usize,
            ),
        };

        log::debug!(
            "🧭 测评完成: 作答 {} 题, 依恋 {:?}, 类型 {}, 风险 {} ({:?})",
            answered.len(),
            attachment_style,
            type_indicator.code(),
            risk_score,
            color
        );

        Ok(CompatibilityProfile {
            color,
            risk_score,
            personality_traits,
            attachment_style,
            type_indicator,
            emotional_intelligence,
            strengths_weaknesses,
            answered_count: answered.len() as u8,
            bank_version: C::Bank::version(),
        })
    }

    fn compare_profiles(
        a: &CompatibilityProfile,
        b: &CompatibilityProfile,
    ) -> Result<CompatibilitySummary, ScoringError> {
        let summary = compare::compare_profiles::<C>(a, b).map_err(|e| {
            log::debug!("❌ 画像对比失败: {:?}", e);
            e
        })?;

        log::debug!(
            "💞 画像对比: 评分 {}, 建议 {:?}, 摩擦点 {}",
            summary.score,
            summary.recommendation,
            summary.friction_points.len()
        );

        Ok(summary)
    }
}

/// 使用默认配置评分
pub fn score_quiz(answers: &QuizAnswerSet) -> Result<CompatibilityProfile, ScoringError> {
    ScoringEngine::<DefaultScoringConfig>::score_quiz(answers)
}

/// 使用默认配置对比两份画像
pub fn compare_profiles(
    a: &CompatibilityProfile,
    b: &CompatibilityProfile,
) -> Result<CompatibilitySummary, ScoringError> {
    ScoringEngine::<DefaultScoringConfig>::compare_profiles(a, b)
}
