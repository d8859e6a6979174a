//! # WhoToDate 测评 - 错误类型
//!
//! 评分是纯计算，所有错误都是输入校验失败，原样返回给调用方，不做重试。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::DispatchError;

use crate::types::{BigFive, EqDomain, OptionIndex, QuestionId};

/// 评分错误
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum ScoringError {
    /// 答卷为空
    InsufficientData,
    /// 题目 ID 不在题库中
    UnknownQuestionId { question_id: QuestionId },
    /// 选项索引超出该题选项数
    OptionIndexOutOfRange {
        question_id: QuestionId,
        option: OptionIndex,
        option_count: u8,
    },
    /// 画像数据不合法（通常来自外部存储的损坏数据）
    InvalidProfile(ProfileDefect),
}

/// 画像不合法的具体原因
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum ProfileDefect {
    /// 人格评分超过 100
    TraitOutOfRange(BigFive),
    /// 情商评分超过 100
    EqOutOfRange(EqDomain),
    /// 风险值超过 100
    RiskOutOfRange,
    /// 优势条目过多
    TooManyStrengths,
    /// 挑战条目过多
    TooManyChallenges,
    /// 理想伴侣特质过多
    TooManyPartnerTraits,
    /// 颜色与风险值不一致
    ColorMismatch,
    /// 题库版本与当前题库不一致
    BankVersionMismatch,
    /// 作答数为 0 或超过题库题目数
    AnsweredCountOutOfRange,
    /// 优势或挑战中有重复条目
    DuplicateInsight,
    /// 理想伴侣特质中有重复条目
    DuplicatePartnerTrait,
}

impl ScoringError {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringError::InsufficientData => "InsufficientData",
            ScoringError::UnknownQuestionId { .. } => "UnknownQuestionId",
            ScoringError::OptionIndexOutOfRange { .. } => "OptionIndexOutOfRange",
            ScoringError::InvalidProfile(_) => "InvalidProfile",
        }
    }
}

impl core::fmt::Display for ScoringError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScoringError::InsufficientData => write!(f, "no answers to score"),
            ScoringError::UnknownQuestionId { question_id } => {
                write!(f, "question {} is not in the question bank", question_id)
            }
            ScoringError::OptionIndexOutOfRange { question_id, option, option_count } => write!(
                f,
                "option {} is out of range for question {} ({} options)",
                option, question_id, option_count
            ),
            ScoringError::InvalidProfile(defect) => write!(f, "invalid profile: {:?}", defect),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScoringError {}

impl From<ScoringError> for DispatchError {
    fn from(err: ScoringError) -> Self {
        DispatchError::Other(err.as_str())
    }
}

impl From<ProfileDefect> for ScoringError {
    fn from(defect: ProfileDefect) -> Self {
        ScoringError::InvalidProfile(defect)
    }
}
