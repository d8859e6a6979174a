//! # WhoToDate 测评 - 共享类型定义
//!
//! 定义题库、答卷、兼容性画像与双人对比结果的数据结构。
//!
//! 序列化字段名（serde `camelCase`）与枚举取值是与外部报告存储之间的契约，
//! 修改前必须同步提升题库版本。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_std::{collections::btree_map::BTreeMap, vec::Vec};

use crate::traits::QuestionBank;

/// 题目 ID（从 1 开始）
pub type QuestionId = u8;

/// 选项索引（从 0 开始）
pub type OptionIndex = u8;

/// 0-100 区间的评分
pub type Score = u8;

/// 评分上限
pub const MAX_SCORE: Score = 100;

/// 无作答时使用的中性评分
pub const NEUTRAL_SCORE: Score = 50;

/// 四舍五入的整数平均（.5 向上取整）
///
/// 所有评分都走这一条路径，保证不同实现之间逐位一致。
pub fn rounded_mean(sum: u32, count: u32) -> Score {
    if count == 0 {
        return NEUTRAL_SCORE;
    }
    ((sum + count / 2) / count).min(MAX_SCORE as u32) as Score
}

// ============================================================================
// 题目分类
// ============================================================================

/// 题目所属测评框架
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum Framework {
    /// 大五人格
    PersonalityTraits = 0,
    /// 依恋类型
    Attachment = 1,
    /// 四维类型指标
    TypeIndicator = 2,
    /// 情商
    EmotionalIntelligence = 3,
    /// 价值观
    Values = 4,
}

/// 大五人格维度
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum BigFive {
    Openness = 0,
    Conscientiousness = 1,
    Extraversion = 2,
    Agreeableness = 3,
    Neuroticism = 4,
}

impl BigFive {
    pub const ALL: [BigFive; 5] = [
        BigFive::Openness,
        BigFive::Conscientiousness,
        BigFive::Extraversion,
        BigFive::Agreeableness,
        BigFive::Neuroticism,
    ];
}

/// 情商子维度
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum EqDomain {
    SelfAwareness = 0,
    SelfRegulation = 1,
    Motivation = 2,
    Empathy = 3,
    SocialSkills = 4,
}

impl EqDomain {
    pub const ALL: [EqDomain; 5] = [
        EqDomain::SelfAwareness,
        EqDomain::SelfRegulation,
        EqDomain::Motivation,
        EqDomain::Empathy,
        EqDomain::SocialSkills,
    ];
}

/// 类型指标的四条轴
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum TypeAxis {
    /// E / I
    EnergySource = 0,
    /// S / N
    Perception = 1,
    /// T / F
    Judgment = 2,
    /// J / P
    Lifestyle = 3,
}

impl TypeAxis {
    pub const ALL: [TypeAxis; 4] = [
        TypeAxis::EnergySource,
        TypeAxis::Perception,
        TypeAxis::Judgment,
        TypeAxis::Lifestyle,
    ];

    /// 轴两端的极性（第一极, 第二极）
    pub fn poles(&self) -> (TypePole, TypePole) {
        match self {
            TypeAxis::EnergySource => (TypePole::Extravert, TypePole::Introvert),
            TypeAxis::Perception => (TypePole::Sensing, TypePole::Intuitive),
            TypeAxis::Judgment => (TypePole::Thinking, TypePole::Feeling),
            TypeAxis::Lifestyle => (TypePole::Judging, TypePole::Perceiving),
        }
    }
}

/// 类型指标的单个极性
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum TypePole {
    Extravert = 0,
    Introvert = 1,
    Sensing = 2,
    Intuitive = 3,
    Thinking = 4,
    Feeling = 5,
    Judging = 6,
    Perceiving = 7,
}

impl TypePole {
    /// 所属轴
    pub fn axis(&self) -> TypeAxis {
        match self {
            TypePole::Extravert | TypePole::Introvert => TypeAxis::EnergySource,
            TypePole::Sensing | TypePole::Intuitive => TypeAxis::Perception,
            TypePole::Thinking | TypePole::Feeling => TypeAxis::Judgment,
            TypePole::Judging | TypePole::Perceiving => TypeAxis::Lifestyle,
        }
    }

    /// 代码字母
    pub fn letter(&self) -> char {
        match self {
            TypePole::Extravert => 'E',
            TypePole::Introvert => 'I',
            TypePole::Sensing => 'S',
            TypePole::Intuitive => 'N',
            TypePole::Thinking => 'T',
            TypePole::Feeling => 'F',
            TypePole::Judging => 'J',
            TypePole::Perceiving => 'P',
        }
    }
}

/// 题目探测的具体维度
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TraitLabel {
    BigFive(BigFive),
    Eq(EqDomain),
    Axis(TypeAxis),
}

// ============================================================================
// 题目定义（静态数据，不参与编码）
// ============================================================================

/// 选项携带的计分信号
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Signal {
    /// 通过题目维度的权重表按选项索引计分
    Scaled,
    /// 支持的依恋类型及分值
    Attachment(&'static [(AttachmentStyle, u8)]),
    /// 类型指标投票
    Pole(TypePole),
    /// 对应的理想伴侣特质
    Partner(PartnerTrait),
}

/// 题目选项
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Choice {
    pub text: &'static str,
    pub signal: Signal,
}

/// 题目
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub framework: Framework,
    pub label: Option<TraitLabel>,
    pub options: &'static [Choice],
}

impl Question {
    /// 选项数量
    pub fn option_count(&self) -> u8 {
        self.options.len() as u8
    }

    /// 按索引获取选项
    pub fn choice(&self, option: OptionIndex) -> Option<&'static Choice> {
        self.options.get(option as usize)
    }
}

// ============================================================================
// 答卷
// ============================================================================

/// 答卷：题目 ID → 选项索引
///
/// 作答过程中逐题写入，同一题重复作答以最后一次为准。
/// 合法性在评分入口统一校验。
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct QuizAnswerSet(BTreeMap<QuestionId, OptionIndex>);

impl QuizAnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录作答，返回该题之前的选项
    pub fn answer(&mut self, question_id: QuestionId, option: OptionIndex) -> Option<OptionIndex> {
        self.0.insert(question_id, option)
    }

    /// 撤回作答
    pub fn withdraw(&mut self, question_id: QuestionId) -> Option<OptionIndex> {
        self.0.remove(&question_id)
    }

    pub fn get(&self, question_id: QuestionId) -> Option<OptionIndex> {
        self.0.get(&question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 按题目 ID 升序遍历
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, OptionIndex)> + '_ {
        self.0.iter().map(|(id, option)| (*id, *option))
    }

    /// 相对于题库的作答进度
    pub fn progress<B: QuestionBank>(&self) -> QuizProgress {
        let questions = B::questions();
        let answered = questions
            .iter()
            .filter(|q| self.0.contains_key(&q.id))
            .count();
        QuizProgress {
            answered: answered as u8,
            total: questions.len() as u8,
        }
    }

    /// 题库每一题都已作答
    pub fn is_complete<B: QuestionBank>(&self) -> bool {
        self.progress::<B>().is_complete()
    }

    /// 未作答的题目 ID（升序）
    pub fn missing<B: QuestionBank>(&self) -> Vec<QuestionId> {
        B::questions()
            .iter()
            .map(|q| q.id)
            .filter(|id| !self.0.contains_key(id))
            .collect()
    }
}

impl From<BTreeMap<QuestionId, OptionIndex>> for QuizAnswerSet {
    fn from(map: BTreeMap<QuestionId, OptionIndex>) -> Self {
        Self(map)
    }
}

impl FromIterator<(QuestionId, OptionIndex)> for QuizAnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, OptionIndex)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 作答进度
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizProgress {
    pub answered: u8,
    pub total: u8,
}

impl QuizProgress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered >= self.total
    }

    /// 完成百分比（向下取整）
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.answered as u32 * 100 / self.total as u32) as u8
    }
}

// ============================================================================
// 颜色分级
// ============================================================================

/// 兼容性风险颜色
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum ColorBucket {
    /// 低风险
    #[default]
    Green = 0,
    /// 需要留意
    Yellow = 1,
    /// 高风险
    Red = 2,
}

impl ColorBucket {
    pub fn headline(&self) -> &'static str {
        match self {
            ColorBucket::Green => "Green light: you bring a secure, steady foundation to relationships",
            ColorBucket::Yellow => "Yellow light: solid potential with a few patterns worth watching",
            ColorBucket::Red => "Red light: some patterns may make relationships feel turbulent right now",
        }
    }
}

// ============================================================================
// 依恋类型
// ============================================================================

/// 依恋类型
///
/// 声明顺序即平局时的优先级：安全 > 焦虑 > 回避 > 恐惧。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum AttachmentStyle {
    /// 安全型
    #[default]
    Secure = 0,
    /// 焦虑型
    Anxious = 1,
    /// 回避型
    Avoidant = 2,
    /// 恐惧型
    Fearful = 3,
}

impl AttachmentStyle {
    /// 按平局优先级排列
    pub const PRIORITY: [AttachmentStyle; 4] = [
        AttachmentStyle::Secure,
        AttachmentStyle::Anxious,
        AttachmentStyle::Avoidant,
        AttachmentStyle::Fearful,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            AttachmentStyle::Secure => "Comfortable with closeness and with independence",
            AttachmentStyle::Anxious => "Craves closeness and worries about a partner pulling away",
            AttachmentStyle::Avoidant => "Values independence and keeps some emotional distance",
            AttachmentStyle::Fearful => "Wants closeness but finds it hard to trust it",
        }
    }
}

// ============================================================================
// 类型指标
// ============================================================================

/// 四字母类型代码
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "UPPERCASE"))]
pub enum TypeIndicator {
    Estj = 0,
    Estp = 1,
    Esfj = 2,
    Esfp = 3,
    Entj = 4,
    Entp = 5,
    Enfj = 6,
    Enfp = 7,
    Istj = 8,
    Istp = 9,
    Isfj = 10,
    Isfp = 11,
    Intj = 12,
    Intp = 13,
    Infj = 14,
    Infp = 15,
}

impl TypeIndicator {
    /// 由四条轴各自的取向组合出类型
    pub fn from_preferences(extravert: bool, sensing: bool, thinking: bool, judging: bool) -> Self {
        match (extravert, sensing, thinking, judging) {
            (true, true, true, true) => Self::Estj,
            (true, true, true, false) => Self::Estp,
            (true, true, false, true) => Self::Esfj,
            (true, true, false, false) => Self::Esfp,
            (true, false, true, true) => Self::Entj,
            (true, false, true, false) => Self::Entp,
            (true, false, false, true) => Self::Enfj,
            (true, false, false, false) => Self::Enfp,
            (false, true, true, true) => Self::Istj,
            (false, true, true, false) => Self::Istp,
            (false, true, false, true) => Self::Isfj,
            (false, true, false, false) => Self::Isfp,
            (false, false, true, true) => Self::Intj,
            (false, false, true, false) => Self::Intp,
            (false, false, false, true) => Self::Infj,
            (false, false, false, false) => Self::Infp,
        }
    }

    /// 由四个极性组合出类型，极性必须分别来自四条轴
    pub fn from_poles(poles: [TypePole; 4]) -> Option<Self> {
        let axes = poles.map(|p| p.axis());
        if axes != TypeAxis::ALL {
            return None;
        }
        Some(Self::from_preferences(
            poles[0] == TypePole::Extravert,
            poles[1] == TypePole::Sensing,
            poles[2] == TypePole::Thinking,
            poles[3] == TypePole::Judging,
        ))
    }

    /// 拆回四个极性
    pub fn poles(&self) -> [TypePole; 4] {
        let index = *self as u8;
        let pick = |bit: u8, first: TypePole, second: TypePole| {
            if index & bit == 0 {
                first
            } else {
                second
            }
        };
        [
            pick(8, TypePole::Extravert, TypePole::Introvert),
            pick(4, TypePole::Sensing, TypePole::Intuitive),
            pick(2, TypePole::Thinking, TypePole::Feeling),
            pick(1, TypePole::Judging, TypePole::Perceiving),
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Estj => "ESTJ",
            Self::Estp => "ESTP",
            Self::Esfj => "ESFJ",
            Self::Esfp => "ESFP",
            Self::Entj => "ENTJ",
            Self::Entp => "ENTP",
            Self::Enfj => "ENFJ",
            Self::Enfp => "ENFP",
            Self::Istj => "ISTJ",
            Self::Istp => "ISTP",
            Self::Isfj => "ISFJ",
            Self::Isfp => "ISFP",
            Self::Intj => "INTJ",
            Self::Intp => "INTP",
            Self::Infj => "INFJ",
            Self::Infp => "INFP",
        }
    }

    /// 原型名称
    pub fn archetype(&self) -> &'static str {
        match self {
            Self::Estj => "The Supervisor",
            Self::Estp => "The Promoter",
            Self::Esfj => "The Provider",
            Self::Esfp => "The Performer",
            Self::Entj => "The Fieldmarshal",
            Self::Entp => "The Inventor",
            Self::Enfj => "The Teacher",
            Self::Enfp => "The Champion",
            Self::Istj => "The Inspector",
            Self::Istp => "The Crafter",
            Self::Isfj => "The Protector",
            Self::Isfp => "The Composer",
            Self::Intj => "The Mastermind",
            Self::Intp => "The Architect",
            Self::Infj => "The Counselor",
            Self::Infp => "The Healer",
        }
    }
}

// ============================================================================
// 人格与情商评分
// ============================================================================

/// 大五人格评分 (0-100)
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct PersonalityTraits {
    pub openness: Score,
    pub conscientiousness: Score,
    pub extraversion: Score,
    pub agreeableness: Score,
    pub neuroticism: Score,
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self {
            openness: NEUTRAL_SCORE,
            conscientiousness: NEUTRAL_SCORE,
            extraversion: NEUTRAL_SCORE,
            agreeableness: NEUTRAL_SCORE,
            neuroticism: NEUTRAL_SCORE,
        }
    }
}

impl PersonalityTraits {
    pub fn get(&self, dimension: BigFive) -> Score {
        match dimension {
            BigFive::Openness => self.openness,
            BigFive::Conscientiousness => self.conscientiousness,
            BigFive::Extraversion => self.extraversion,
            BigFive::Agreeableness => self.agreeableness,
            BigFive::Neuroticism => self.neuroticism,
        }
    }

    pub fn set(&mut self, dimension: BigFive, score: Score) {
        let slot = match dimension {
            BigFive::Openness => &mut self.openness,
            BigFive::Conscientiousness => &mut self.conscientiousness,
            BigFive::Extraversion => &mut self.extraversion,
            BigFive::Agreeableness => &mut self.agreeableness,
            BigFive::Neuroticism => &mut self.neuroticism,
        };
        *slot = score;
    }
}

/// 情商评分 (0-100)
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct EmotionalIntelligence {
    pub self_awareness: Score,
    pub self_regulation: Score,
    pub motivation: Score,
    pub empathy: Score,
    pub social_skills: Score,
}

impl Default for EmotionalIntelligence {
    fn default() -> Self {
        Self {
            self_awareness: NEUTRAL_SCORE,
            self_regulation: NEUTRAL_SCORE,
            motivation: NEUTRAL_SCORE,
            empathy: NEUTRAL_SCORE,
            social_skills: NEUTRAL_SCORE,
        }
    }
}

impl EmotionalIntelligence {
    pub fn get(&self, domain: EqDomain) -> Score {
        match domain {
            EqDomain::SelfAwareness => self.self_awareness,
            EqDomain::SelfRegulation => self.self_regulation,
            EqDomain::Motivation => self.motivation,
            EqDomain::Empathy => self.empathy,
            EqDomain::SocialSkills => self.social_skills,
        }
    }

    pub fn set(&mut self, domain: EqDomain, score: Score) {
        let slot = match domain {
            EqDomain::SelfAwareness => &mut self.self_awareness,
            EqDomain::SelfRegulation => &mut self.self_regulation,
            EqDomain::Motivation => &mut self.motivation,
            EqDomain::Empathy => &mut self.empathy,
            EqDomain::SocialSkills => &mut self.social_skills,
        };
        *slot = score;
    }

    /// 五项平均（四舍五入）
    pub fn average(&self) -> Score {
        let sum: u32 = EqDomain::ALL.iter().map(|d| self.get(*d) as u32).sum();
        rounded_mean(sum, EqDomain::ALL.len() as u32)
    }
}

// ============================================================================
// 洞察维度与短语
// ============================================================================

/// 优势/挑战的候选维度
///
/// 声明顺序即同分时的排序。神经质以"情绪稳定性"（100 - 神经质）参与比较。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum Dimension {
    Openness = 0,
    Conscientiousness = 1,
    Extraversion = 2,
    Agreeableness = 3,
    EmotionalStability = 4,
    SelfAwareness = 5,
    SelfRegulation = 6,
    Motivation = 7,
    Empathy = 8,
    SocialSkills = 9,
}

impl Dimension {
    pub const ALL: [Dimension; 10] = [
        Dimension::Openness,
        Dimension::Conscientiousness,
        Dimension::Extraversion,
        Dimension::Agreeableness,
        Dimension::EmotionalStability,
        Dimension::SelfAwareness,
        Dimension::SelfRegulation,
        Dimension::Motivation,
        Dimension::Empathy,
        Dimension::SocialSkills,
    ];

    /// 取该维度在画像中的值（越高越正面）
    pub fn value_in(&self, traits: &PersonalityTraits, eq: &EmotionalIntelligence) -> Score {
        match self {
            Dimension::Openness => traits.openness,
            Dimension::Conscientiousness => traits.conscientiousness,
            Dimension::Extraversion => traits.extraversion,
            Dimension::Agreeableness => traits.agreeableness,
            Dimension::EmotionalStability => MAX_SCORE.saturating_sub(traits.neuroticism),
            Dimension::SelfAwareness => eq.self_awareness,
            Dimension::SelfRegulation => eq.self_regulation,
            Dimension::Motivation => eq.motivation,
            Dimension::Empathy => eq.empathy,
            Dimension::SocialSkills => eq.social_skills,
        }
    }
}

/// 优势与挑战短语
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum Insight {
    // ========== 优势 ==========
    OpenMinded = 0,
    Dependable = 1,
    Sociable = 2,
    Warmhearted = 3,
    EvenTempered = 4,
    SelfAware = 5,
    Composed = 6,
    Driven = 7,
    Empathetic = 8,
    GoodCommunicator = 9,
    // ========== 挑战 ==========
    ResistsChange = 10,
    Disorganized = 11,
    Withdrawn = 12,
    Critical = 13,
    Reactive = 14,
    EmotionalBlindSpots = 15,
    Impulsive = 16,
    LosesMomentum = 17,
    Detached = 18,
    ConflictAvoidant = 19,
}

impl Insight {
    pub fn text(&self) -> &'static str {
        match self {
            Insight::OpenMinded => "Curious and open to new experiences",
            Insight::Dependable => "Dependable and follows through on plans",
            Insight::Sociable => "Brings social energy to the relationship",
            Insight::Warmhearted => "Warm, cooperative and quick to forgive",
            Insight::EvenTempered => "Stays calm under emotional pressure",
            Insight::SelfAware => "Knows their own feelings and needs",
            Insight::Composed => "Keeps reactions in check during conflict",
            Insight::Driven => "Invests energy into shared goals",
            Insight::Empathetic => "Reads and responds to a partner's feelings",
            Insight::GoodCommunicator => "Communicates clearly and eases tension",
            Insight::ResistsChange => "May resist change and new experiences",
            Insight::Disorganized => "Can struggle with plans and commitments",
            Insight::Withdrawn => "May need a lot of time alone to recharge",
            Insight::Critical => "Can be critical or slow to compromise",
            Insight::Reactive => "Feelings can swing quickly under stress",
            Insight::EmotionalBlindSpots => "May miss their own emotional signals",
            Insight::Impulsive => "Reacts before thinking in heated moments",
            Insight::LosesMomentum => "Can lose momentum on shared goals",
            Insight::Detached => "May overlook a partner's emotional needs",
            Insight::ConflictAvoidant => "Finds it hard to talk through conflict",
        }
    }
}

/// 理想伴侣特质
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum PartnerTrait {
    Communicative = 0,
    Reliable = 1,
    Patient = 2,
    Calm = 3,
    Loyal = 4,
    Ambitious = 5,
    Adventurous = 6,
    FamilyOriented = 7,
    Honest = 8,
    Affectionate = 9,
    Independent = 10,
    Humorous = 11,
    Curious = 12,
    Spontaneous = 13,
    Supportive = 14,
    Generous = 15,
}

impl PartnerTrait {
    pub fn text(&self) -> &'static str {
        match self {
            PartnerTrait::Communicative => "Talks openly about feelings",
            PartnerTrait::Reliable => "Consistent and reassuring",
            PartnerTrait::Patient => "Gives you room without pulling away",
            PartnerTrait::Calm => "Steady and slow to escalate",
            PartnerTrait::Loyal => "Committed for the long run",
            PartnerTrait::Ambitious => "Driven to build something together",
            PartnerTrait::Adventurous => "Always up for something new",
            PartnerTrait::FamilyOriented => "Puts family at the centre",
            PartnerTrait::Honest => "Direct and transparent",
            PartnerTrait::Affectionate => "Generous with warmth and touch",
            PartnerTrait::Independent => "Has a full life of their own",
            PartnerTrait::Humorous => "Keeps things light and playful",
            PartnerTrait::Curious => "Loves learning and ideas",
            PartnerTrait::Spontaneous => "Happy to change plans on a whim",
            PartnerTrait::Supportive => "Shows up when things get hard",
            PartnerTrait::Generous => "Shares time and resources freely",
        }
    }
}

// ============================================================================
// 兼容性画像
// ============================================================================

/// 优势、挑战与理想伴侣特质
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct StrengthsWeaknesses {
    pub strengths: Vec<Insight>,
    pub challenges: Vec<Insight>,
    pub ideal_partner_traits: Vec<PartnerTrait>,
}

/// 兼容性画像
///
/// 完全由答卷推导，答卷变化时整体重算，不做增量修改。
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct CompatibilityProfile {
    /// 风险颜色
    pub color: ColorBucket,
    /// 颜色所依据的风险值 (0-100)
    pub risk_score: Score,
    /// 大五人格
    pub personality_traits: PersonalityTraits,
    /// 依恋类型
    pub attachment_style: AttachmentStyle,
    /// 四字母类型
    pub type_indicator: TypeIndicator,
    /// 情商
    pub emotional_intelligence: EmotionalIntelligence,
    /// 优势、挑战与理想伴侣特质
    pub strengths_weaknesses: StrengthsWeaknesses,
    /// 参与计算的作答数
    pub answered_count: u8,
    /// 题库版本
    pub bank_version: u8,
}

impl CompatibilityProfile {
    /// 某一洞察维度的值
    pub fn dimension(&self, dimension: Dimension) -> Score {
        dimension.value_in(&self.personality_traits, &self.emotional_intelligence)
    }

    /// 展示用文案
    pub fn narrative(&self) -> ProfileNarrative {
        ProfileNarrative {
            headline: self.color.headline(),
            attachment: self.attachment_style.description(),
            archetype: self.type_indicator.archetype(),
        }
    }
}

/// 画像的展示文案（不持久化）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProfileNarrative {
    pub headline: &'static str,
    pub attachment: &'static str,
    pub archetype: &'static str,
}

// ============================================================================
// 双人对比
// ============================================================================

/// 摩擦点
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum FrictionPoint {
    /// 依恋类型组合容易互相触发
    AttachmentMismatch = 0,
    /// 情绪波动差异大
    EmotionalVolatility = 1,
    /// 社交能量差异大
    SocialEnergyGap = 2,
    /// 计划性差异大
    PlanningStyleClash = 3,
    /// 对新鲜感的需求差异大
    NoveltyGap = 4,
    /// 共情不足
    EmpathyGap = 5,
}

impl FrictionPoint {
    pub fn text(&self) -> &'static str {
        match self {
            FrictionPoint::AttachmentMismatch => "Your attachment styles can trigger each other",
            FrictionPoint::EmotionalVolatility => "Emotional ups and downs may not line up",
            FrictionPoint::SocialEnergyGap => "Very different needs for social time",
            FrictionPoint::PlanningStyleClash => "Planners and improvisers may clash",
            FrictionPoint::NoveltyGap => "Different appetites for novelty and routine",
            FrictionPoint::EmpathyGap => "Feelings may go unnoticed between you",
        }
    }
}

/// 匹配建议
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum MatchRecommendation {
    /// 90-100分
    PerfectMatch = 0,
    /// 75-89分
    GoodMatch = 1,
    /// 60-74分
    #[default]
    AverageMatch = 2,
    /// 40-59分
    NeedsWork = 3,
    /// 0-39分
    NotRecommended = 4,
}

impl MatchRecommendation {
    /// 根据评分获取建议
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::PerfectMatch,
            75..=89 => Self::GoodMatch,
            60..=74 => Self::AverageMatch,
            40..=59 => Self::NeedsWork,
            _ => Self::NotRecommended,
        }
    }
}

/// 双人兼容性对比结果
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct CompatibilitySummary {
    /// 综合评分 (0-100)，与参数顺序无关
    pub score: Score,
    /// 匹配建议
    pub recommendation: MatchRecommendation,
    /// 可以互相依靠的优势维度
    pub complementary_strengths: Vec<Dimension>,
    /// 摩擦点
    pub friction_points: Vec<FrictionPoint>,
}
