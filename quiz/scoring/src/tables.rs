//! # 评分常量与对照表
//!
//! 引擎唯一的"设计面"。表中任何数值变化都会改变历史画像的含义，
//! 修改时必须同步提升 [`crate::bank::BANK_VERSION`]。
//!
//! ## 选项权重表（选项索引 0..3）
//!
//! | 维度 | 0 | 1 | 2 | 3 |
//! |------|---|---|---|---|
//! | 开放性 | 100 | 70 | 35 | 0 |
//! | 尽责性 | 100 | 65 | 35 | 0 |
//! | 外向性 | 100 | 65 | 35 | 0 |
//! | 宜人性 | 100 | 75 | 40 | 0 |
//! | 神经质 | 0 | 30 | 65 | 100 |
//! | 自我觉察 | 100 | 70 | 35 | 0 |
//! | 自我调节 | 100 | 70 | 35 | 0 |
//! | 内在动机 | 100 | 65 | 30 | 0 |
//! | 共情 | 100 | 75 | 40 | 0 |
//! | 社交技能 | 100 | 65 | 35 | 0 |
//!
//! ## 风险值
//!
//! ```text
//! risk = (依恋风险 × 40 + (100 - 情商均分) × 30 + 情绪平衡 × 30) / 100
//! 情绪平衡 = (神经质 + 100 - 宜人性) / 2
//! ```
//!
//! 均为向下取整的整数运算。

use quiz_common::{
    AttachmentStyle, BigFive, Dimension, EqDomain, Insight, PartnerTrait, Score, TypeAxis,
    TypePole,
};

// ============================================================================
// 选项权重表
// ============================================================================

pub const OPENNESS_WEIGHTS: [Score; 4] = [100, 70, 35, 0];
pub const CONSCIENTIOUSNESS_WEIGHTS: [Score; 4] = [100, 65, 35, 0];
pub const EXTRAVERSION_WEIGHTS: [Score; 4] = [100, 65, 35, 0];
pub const AGREEABLENESS_WEIGHTS: [Score; 4] = [100, 75, 40, 0];
/// 选项 0 为最平稳的回答
pub const NEUROTICISM_WEIGHTS: [Score; 4] = [0, 30, 65, 100];

pub const SELF_AWARENESS_WEIGHTS: [Score; 4] = [100, 70, 35, 0];
pub const SELF_REGULATION_WEIGHTS: [Score; 4] = [100, 70, 35, 0];
pub const MOTIVATION_WEIGHTS: [Score; 4] = [100, 65, 30, 0];
pub const EMPATHY_WEIGHTS: [Score; 4] = [100, 75, 40, 0];
pub const SOCIAL_SKILLS_WEIGHTS: [Score; 4] = [100, 65, 35, 0];

/// 大五人格权重表
pub fn big_five_weights(dimension: BigFive) -> &'static [Score] {
    match dimension {
        BigFive::Openness => &OPENNESS_WEIGHTS,
        BigFive::Conscientiousness => &CONSCIENTIOUSNESS_WEIGHTS,
        BigFive::Extraversion => &EXTRAVERSION_WEIGHTS,
        BigFive::Agreeableness => &AGREEABLENESS_WEIGHTS,
        BigFive::Neuroticism => &NEUROTICISM_WEIGHTS,
    }
}

/// 情商权重表
pub fn eq_weights(domain: EqDomain) -> &'static [Score] {
    match domain {
        EqDomain::SelfAwareness => &SELF_AWARENESS_WEIGHTS,
        EqDomain::SelfRegulation => &SELF_REGULATION_WEIGHTS,
        EqDomain::Motivation => &MOTIVATION_WEIGHTS,
        EqDomain::Empathy => &EMPATHY_WEIGHTS,
        EqDomain::SocialSkills => &SOCIAL_SKILLS_WEIGHTS,
    }
}

// ============================================================================
// 类型指标
// ============================================================================

/// 平局（含无作答）时每条轴取的默认极性
pub fn axis_default(axis: TypeAxis) -> TypePole {
    match axis {
        TypeAxis::EnergySource => TypePole::Introvert,
        TypeAxis::Perception => TypePole::Intuitive,
        TypeAxis::Judgment => TypePole::Feeling,
        TypeAxis::Lifestyle => TypePole::Judging,
    }
}

// ============================================================================
// 风险值与颜色
// ============================================================================

/// 依恋风险：安全型不计风险
pub fn attachment_risk(style: AttachmentStyle) -> Score {
    match style {
        AttachmentStyle::Secure => 0,
        AttachmentStyle::Anxious => 60,
        AttachmentStyle::Avoidant => 60,
        AttachmentStyle::Fearful => 100,
    }
}

pub const RISK_WEIGHT_ATTACHMENT: u32 = 40;
pub const RISK_WEIGHT_EQ: u32 = 30;
pub const RISK_WEIGHT_BALANCE: u32 = 30;

/// 风险值 ≤ 此值为绿色
pub const GREEN_MAX_RISK: Score = 35;
/// 风险值 ≤ 此值为黄色，否则红色
pub const YELLOW_MAX_RISK: Score = 60;

// ============================================================================
// 优势与挑战
// ============================================================================

/// 维度值 ≥ 此值视为优势
pub const STRENGTH_THRESHOLD: Score = 70;
/// 维度值 ≤ 此值视为挑战
pub const CHALLENGE_THRESHOLD: Score = 35;

pub const DEFAULT_MAX_STRENGTHS: u32 = 3;
pub const DEFAULT_MAX_CHALLENGES: u32 = 3;
pub const DEFAULT_MAX_PARTNER_TRAITS: u32 = 5;

/// 维度 → 优势短语
pub fn strength_phrase(dimension: Dimension) -> Insight {
    match dimension {
        Dimension::Openness => Insight::OpenMinded,
        Dimension::Conscientiousness => Insight::Dependable,
        Dimension::Extraversion => Insight::Sociable,
        Dimension::Agreeableness => Insight::Warmhearted,
        Dimension::EmotionalStability => Insight::EvenTempered,
        Dimension::SelfAwareness => Insight::SelfAware,
        Dimension::SelfRegulation => Insight::Composed,
        Dimension::Motivation => Insight::Driven,
        Dimension::Empathy => Insight::Empathetic,
        Dimension::SocialSkills => Insight::GoodCommunicator,
    }
}

/// 维度 → 挑战短语
pub fn challenge_phrase(dimension: Dimension) -> Insight {
    match dimension {
        Dimension::Openness => Insight::ResistsChange,
        Dimension::Conscientiousness => Insight::Disorganized,
        Dimension::Extraversion => Insight::Withdrawn,
        Dimension::Agreeableness => Insight::Critical,
        Dimension::EmotionalStability => Insight::Reactive,
        Dimension::SelfAwareness => Insight::EmotionalBlindSpots,
        Dimension::SelfRegulation => Insight::Impulsive,
        Dimension::Motivation => Insight::LosesMomentum,
        Dimension::Empathy => Insight::Detached,
        Dimension::SocialSkills => Insight::ConflictAvoidant,
    }
}

/// 依恋类型最需要的伴侣特质
pub fn attachment_partner_trait(style: AttachmentStyle) -> PartnerTrait {
    match style {
        AttachmentStyle::Secure => PartnerTrait::Communicative,
        AttachmentStyle::Anxious => PartnerTrait::Reliable,
        AttachmentStyle::Avoidant => PartnerTrait::Patient,
        AttachmentStyle::Fearful => PartnerTrait::Calm,
    }
}

// ============================================================================
// 双人对比
// ============================================================================

/// 依恋组合评分（对称矩阵，行列顺序：安全、焦虑、回避、恐惧）
pub const ATTACHMENT_PAIR_SCORES: [[Score; 4]; 4] = [
    [100, 75, 70, 60],
    [75, 50, 25, 35],
    [70, 25, 45, 30],
    [60, 35, 30, 25],
];

pub fn attachment_pair_score(a: AttachmentStyle, b: AttachmentStyle) -> Score {
    ATTACHMENT_PAIR_SCORES[a as usize][b as usize]
}

pub const COMPARE_WEIGHT_ATTACHMENT: u32 = 40;
pub const COMPARE_WEIGHT_ALIGNMENT: u32 = 35;
pub const COMPARE_WEIGHT_EQ: u32 = 25;

/// 依恋组合评分 ≤ 此值记为摩擦点
pub const ATTACHMENT_FRICTION_MAX: Score = 35;
/// 单项人格差值 ≥ 此值记为摩擦点
pub const TRAIT_DELTA_FRICTION: Score = 40;
/// 双方神经质都 ≥ 此值记为情绪摩擦
pub const HIGH_NEUROTICISM: Score = 70;
