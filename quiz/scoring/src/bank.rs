//! # 标准题库（版本 1）
//!
//! 40 道题，每题 4 个选项：
//!
//! | ID | 框架 | 维度 |
//! |----|------|------|
//! | 1-10 | 大五人格 | 每个特质 2 题 |
//! | 11-15 | 依恋类型 | - |
//! | 16-23 | 类型指标 | 每条轴 2 题 |
//! | 24-33 | 情商 | 每个子维度 2 题 |
//! | 34-40 | 价值观 | - |

use quiz_common::{
    AttachmentStyle, BigFive, Choice, EqDomain, Framework, PartnerTrait, Question, QuestionBank,
    QuestionId, Score, Signal, TraitLabel, TypeAxis, TypePole,
};

use crate::tables;

/// 题库版本
pub const BANK_VERSION: u8 = 1;

/// 题库题目数
pub const QUESTION_COUNT: usize = 40;

/// 标准题库
pub struct StandardBank;

impl QuestionBank for StandardBank {
    fn version() -> u8 {
        BANK_VERSION
    }

    fn questions() -> &'static [Question] {
        &QUESTIONS
    }

    fn weights(label: TraitLabel) -> Option<&'static [Score]> {
        match label {
            TraitLabel::BigFive(dimension) => Some(tables::big_five_weights(dimension)),
            TraitLabel::Eq(domain) => Some(tables::eq_weights(domain)),
            TraitLabel::Axis(_) => None,
        }
    }

    fn question(id: QuestionId) -> Option<&'static Question> {
        // ID 连续且从 1 开始
        let index = (id as usize).checked_sub(1)?;
        QUESTIONS.get(index)
    }
}

macro_rules! scaled {
    ($text:expr) => {
        Choice { text: $text, signal: Signal::Scaled }
    };
}

macro_rules! pole {
    ($text:expr, $pole:expr) => {
        Choice { text: $text, signal: Signal::Pole($pole) }
    };
}

macro_rules! partner {
    ($text:expr, $value:expr) => {
        Choice { text: $text, signal: Signal::Partner($value) }
    };
}

macro_rules! attach {
    ($text:expr, $styles:expr) => {
        Choice { text: $text, signal: Signal::Attachment($styles) }
    };
}

const fn big_five(
    id: QuestionId,
    prompt: &'static str,
    dimension: BigFive,
    options: &'static [Choice],
) -> Question {
    Question {
        id,
        prompt,
        framework: Framework::PersonalityTraits,
        label: Some(TraitLabel::BigFive(dimension)),
        options,
    }
}

const fn eq(id: QuestionId, prompt: &'static str, domain: EqDomain, options: &'static [Choice]) -> Question {
    Question {
        id,
        prompt,
        framework: Framework::EmotionalIntelligence,
        label: Some(TraitLabel::Eq(domain)),
        options,
    }
}

const fn axis(id: QuestionId, prompt: &'static str, axis: TypeAxis, options: &'static [Choice]) -> Question {
    Question {
        id,
        prompt,
        framework: Framework::TypeIndicator,
        label: Some(TraitLabel::Axis(axis)),
        options,
    }
}

const fn attachment(id: QuestionId, prompt: &'static str, options: &'static [Choice]) -> Question {
    Question { id, prompt, framework: Framework::Attachment, label: None, options }
}

const fn values(id: QuestionId, prompt: &'static str, options: &'static [Choice]) -> Question {
    Question { id, prompt, framework: Framework::Values, label: None, options }
}

use AttachmentStyle::{Anxious, Avoidant, Fearful, Secure};

static QUESTIONS: [Question; QUESTION_COUNT] = [
    // ========== 大五人格 ==========
    big_five(1, "When planning a weekend together, you prefer to...", BigFive::Openness, &[
        scaled!("Try something neither of you has done before"),
        scaled!("Mix a new activity with a favourite spot"),
        scaled!("Return to a place you both already love"),
        scaled!("Stay in and keep things low-key"),
    ]),
    big_five(2, "A partner suggests a cuisine you have never tried. You...", BigFive::Openness, &[
        scaled!("Are excited and order the strangest dish"),
        scaled!("Give it a go with something familiar-sounding"),
        scaled!("Go along but would rather not"),
        scaled!("Suggest your usual place instead"),
    ]),
    big_five(3, "How do you handle plans for an anniversary?", BigFive::Conscientiousness, &[
        scaled!("Booked weeks ahead with a backup plan"),
        scaled!("Sorted a few days before"),
        scaled!("Figured out on the day"),
        scaled!("Often forgotten until the last minute"),
    ]),
    big_five(4, "When you promise to call at a certain time, you...", BigFive::Conscientiousness, &[
        scaled!("Always call on time"),
        scaled!("Usually call within a few minutes"),
        scaled!("Call when you remember"),
        scaled!("Often end up texting the next day"),
    ]),
    big_five(5, "At a party where your partner knows nobody, you...", BigFive::Extraversion, &[
        scaled!("Introduce them to everyone in the room"),
        scaled!("Chat with a few friends together"),
        scaled!("Stick to one quiet corner"),
        scaled!("Look for an early exit"),
    ]),
    big_five(6, "After a long week, the ideal Friday night is...", BigFive::Extraversion, &[
        scaled!("A big night out with friends"),
        scaled!("Dinner with another couple"),
        scaled!("A film at home for two"),
        scaled!("Time completely alone"),
    ]),
    big_five(7, "Your partner forgets something important to you. You...", BigFive::Agreeableness, &[
        scaled!("Let it go and assume good intent"),
        scaled!("Mention it gently and move on"),
        scaled!("Stay annoyed for a while"),
        scaled!("Bring it up in future arguments"),
    ]),
    big_five(8, "When you disagree on where to eat, you usually...", BigFive::Agreeableness, &[
        scaled!("Happily go with their choice"),
        scaled!("Find a compromise"),
        scaled!("Argue for your pick"),
        scaled!("Insist on your way"),
    ]),
    big_five(9, "If your partner takes hours to reply to a message, you...", BigFive::Neuroticism, &[
        scaled!("Barely notice"),
        scaled!("Wonder briefly, then carry on"),
        scaled!("Check your phone repeatedly"),
        scaled!("Assume something is wrong"),
    ]),
    big_five(10, "After a small argument, your mood is...", BigFive::Neuroticism, &[
        scaled!("Back to normal within minutes"),
        scaled!("A bit off for an hour or so"),
        scaled!("Unsettled for the rest of the day"),
        scaled!("Shaken for days"),
    ]),
    // ========== 依恋类型 ==========
    attachment(11, "When a partner wants more closeness, you feel...", &[
        attach!("Comfortable and happy to reciprocate", &[(Secure, 1)]),
        attach!("Relieved, you wanted it first", &[(Anxious, 1)]),
        attach!("A little smothered", &[(Avoidant, 1)]),
        attach!("Torn between wanting it and pulling back", &[(Fearful, 1)]),
    ]),
    attachment(12, "When your partner spends a weekend away with friends, you...", &[
        attach!("Enjoy your own time and look forward to their return", &[(Secure, 1)]),
        attach!("Miss them and check in often", &[(Anxious, 1)]),
        attach!("Appreciate the break from togetherness", &[(Avoidant, 1)]),
        attach!("Worry they prefer their friends, then tell yourself you don't care", &[(Fearful, 1)]),
    ]),
    attachment(13, "Talking about your feelings with a partner is...", &[
        attach!("Natural and easy", &[(Secure, 1)]),
        attach!("Necessary to feel reassured", &[(Anxious, 1)]),
        attach!("Uncomfortable, you'd rather handle things yourself", &[(Avoidant, 1)]),
        attach!("Scary, you fear how they will react", &[(Fearful, 1)]),
    ]),
    attachment(14, "When a relationship starts getting serious, you...", &[
        attach!("Feel excited about building something", &[(Secure, 1)]),
        attach!("Worry it might not last", &[(Anxious, 1)]),
        attach!("Feel the urge to slow things down", &[(Avoidant, 1)]),
        attach!("Want it and want to run at the same time", &[(Fearful, 1)]),
    ]),
    attachment(15, "During conflict with a partner, you tend to...", &[
        attach!("Talk it through calmly", &[(Secure, 1)]),
        attach!("Need to resolve it immediately", &[(Anxious, 1)]),
        attach!("Go quiet and wait for it to pass", &[(Avoidant, 1)]),
        attach!("Swing between pushing for answers and shutting down", &[(Fearful, 2), (Avoidant, 1)]),
    ]),
    // ========== 类型指标 ==========
    axis(16, "You recharge best by...", TypeAxis::EnergySource, &[
        pole!("Going out with lots of people", TypePole::Extravert),
        pole!("Meeting a couple of close friends", TypePole::Extravert),
        pole!("A quiet evening with one person", TypePole::Introvert),
        pole!("Time on your own", TypePole::Introvert),
    ]),
    axis(17, "On a first date you usually...", TypeAxis::EnergySource, &[
        pole!("Do most of the talking", TypePole::Extravert),
        pole!("Keep the conversation flowing", TypePole::Extravert),
        pole!("Listen more than you speak", TypePole::Introvert),
        pole!("Need a while to open up", TypePole::Introvert),
    ]),
    axis(18, "When describing a great date, you focus on...", TypeAxis::Perception, &[
        pole!("The food, the place, the details", TypePole::Sensing),
        pole!("What you actually did together", TypePole::Sensing),
        pole!("How it felt and what it might mean", TypePole::Intuitive),
        pole!("Where the relationship could go", TypePole::Intuitive),
    ]),
    axis(19, "You trust more...", TypeAxis::Perception, &[
        pole!("What has been proven", TypePole::Sensing),
        pole!("Your past experience", TypePole::Sensing),
        pole!("Your hunches", TypePole::Intuitive),
        pole!("Possibilities nobody has tried", TypePole::Intuitive),
    ]),
    axis(20, "When a partner comes to you with a problem, you...", TypeAxis::Judgment, &[
        pole!("Offer a practical solution", TypePole::Thinking),
        pole!("Help them weigh the options", TypePole::Thinking),
        pole!("Ask how they are feeling", TypePole::Feeling),
        pole!("Simply comfort them", TypePole::Feeling),
    ]),
    axis(21, "Big decisions should mostly follow...", TypeAxis::Judgment, &[
        pole!("Logic and facts", TypePole::Thinking),
        pole!("A fair pros-and-cons list", TypePole::Thinking),
        pole!("What feels right for both of you", TypePole::Feeling),
        pole!("What keeps everyone happy", TypePole::Feeling),
    ]),
    axis(22, "Holiday plans with a partner should be...", TypeAxis::Lifestyle, &[
        pole!("Fully scheduled", TypePole::Judging),
        pole!("Planned with some free time", TypePole::Judging),
        pole!("Loosely sketched", TypePole::Perceiving),
        pole!("Completely spontaneous", TypePole::Perceiving),
    ]),
    axis(23, "Your home is usually...", TypeAxis::Lifestyle, &[
        pole!("Organised with everything in its place", TypePole::Judging),
        pole!("Tidy most of the time", TypePole::Judging),
        pole!("Comfortably lived-in", TypePole::Perceiving),
        pole!("A creative mess", TypePole::Perceiving),
    ]),
    // ========== 情商 ==========
    eq(24, "When you feel upset, you can name exactly why...", EqDomain::SelfAwareness, &[
        scaled!("Almost always"),
        scaled!("Usually"),
        scaled!("Sometimes"),
        scaled!("Rarely"),
    ]),
    eq(25, "You notice how your mood affects your partner...", EqDomain::SelfAwareness, &[
        scaled!("Right away"),
        scaled!("Soon after"),
        scaled!("Only when they say something"),
        scaled!("Hardly ever"),
    ]),
    eq(26, "In a heated argument, you...", EqDomain::SelfRegulation, &[
        scaled!("Pause before responding"),
        scaled!("Mostly keep your cool"),
        scaled!("Sometimes say things you regret"),
        scaled!("Often lose your temper"),
    ]),
    eq(27, "When jealousy shows up, you...", EqDomain::SelfRegulation, &[
        scaled!("Acknowledge it and let it pass"),
        scaled!("Talk yourself down"),
        scaled!("Act on it occasionally"),
        scaled!("Let it drive what you do"),
    ]),
    eq(28, "When a relationship hits a rough patch, you...", EqDomain::Motivation, &[
        scaled!("Work harder to make it better"),
        scaled!("Keep trying, with some doubts"),
        scaled!("Wait to see if it improves"),
        scaled!("Start looking for the exit"),
    ]),
    eq(29, "Shared goals like saving for a trip keep you...", EqDomain::Motivation, &[
        scaled!("Energised until you reach them"),
        scaled!("Engaged most of the way"),
        scaled!("Interested at the start"),
        scaled!("Indifferent"),
    ]),
    eq(30, "When your partner is quiet after work, you...", EqDomain::Empathy, &[
        scaled!("Sense something is wrong and ask gently"),
        scaled!("Notice and give them space"),
        scaled!("Only notice if they mention it"),
        scaled!("Carry on as usual"),
    ]),
    eq(31, "A friend of your partner is going through a breakup. You...", EqDomain::Empathy, &[
        scaled!("Feel for them and offer help"),
        scaled!("Send a kind message"),
        scaled!("Leave it to your partner"),
        scaled!("Don't really think about it"),
    ]),
    eq(32, "Meeting your partner's family for the first time, you...", EqDomain::SocialSkills, &[
        scaled!("Win everyone over"),
        scaled!("Get along with most people"),
        scaled!("Feel awkward but manage"),
        scaled!("Struggle to connect"),
    ]),
    eq(33, "When friends disagree, you are the one who...", EqDomain::SocialSkills, &[
        scaled!("Finds common ground"),
        scaled!("Lightens the mood"),
        scaled!("Stays out of it"),
        scaled!("Takes a side"),
    ]),
    // ========== 价值观 ==========
    values(34, "What matters most in a long-term partner?", &[
        partner!("Loyalty", PartnerTrait::Loyal),
        partner!("Ambition", PartnerTrait::Ambitious),
        partner!("A sense of adventure", PartnerTrait::Adventurous),
        partner!("Wanting a family", PartnerTrait::FamilyOriented),
    ]),
    values(35, "Which would you forgive least?", &[
        partner!("Lying", PartnerTrait::Honest),
        partner!("Coldness", PartnerTrait::Affectionate),
        partner!("Clinginess", PartnerTrait::Independent),
        partner!("Taking life too seriously", PartnerTrait::Humorous),
    ]),
    values(36, "Your ideal Sunday with a partner involves...", &[
        partner!("A long talk over coffee", PartnerTrait::Communicative),
        partner!("Learning something new together", PartnerTrait::Curious),
        partner!("An unplanned road trip", PartnerTrait::Spontaneous),
        partner!("Family lunch", PartnerTrait::FamilyOriented),
    ]),
    values(37, "In hard times you most want a partner who...", &[
        partner!("Stands by you", PartnerTrait::Supportive),
        partner!("Keeps you calm", PartnerTrait::Calm),
        partner!("Tells you the truth", PartnerTrait::Honest),
        partner!("Makes you laugh", PartnerTrait::Humorous),
    ]),
    values(38, "How should couples handle money?", &[
        partner!("Share everything", PartnerTrait::Generous),
        partner!("Plan and build wealth together", PartnerTrait::Ambitious),
        partner!("Keep finances separate", PartnerTrait::Independent),
        partner!("Spend on experiences", PartnerTrait::Adventurous),
    ]),
    values(39, "Which compliment means the most?", &[
        partner!("You're always there for me", PartnerTrait::Reliable),
        partner!("You're so thoughtful", PartnerTrait::Affectionate),
        partner!("You're fascinating", PartnerTrait::Curious),
        partner!("You're so much fun", PartnerTrait::Spontaneous),
    ]),
    values(40, "Five years from now you hope to be...", &[
        partner!("Committed and settled", PartnerTrait::Loyal),
        partner!("Raising a family", PartnerTrait::FamilyOriented),
        partner!("Travelling the world", PartnerTrait::Adventurous),
        partner!("Building a career side by side", PartnerTrait::Ambitious),
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_contiguous_from_one() {
        for (index, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(question.id as usize, index + 1);
            assert_eq!(StandardBank::question(question.id), Some(question));
        }
        assert_eq!(StandardBank::question(0), None);
        assert_eq!(StandardBank::question(41), None);
    }

    #[test]
    fn attachment_questions_are_eleven_to_fifteen() {
        let ids: sp_std::vec::Vec<QuestionId> = QUESTIONS
            .iter()
            .filter(|q| q.framework == Framework::Attachment)
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, [11, 12, 13, 14, 15]);
    }

    #[test]
    fn every_option_signal_matches_its_framework() {
        for question in QUESTIONS.iter() {
            assert_eq!(question.option_count(), 4, "question {}", question.id);
            for choice in question.options {
                let ok = match (question.framework, choice.signal, question.label) {
                    (Framework::PersonalityTraits, Signal::Scaled, Some(TraitLabel::BigFive(_))) => true,
                    (Framework::EmotionalIntelligence, Signal::Scaled, Some(TraitLabel::Eq(_))) => true,
                    (Framework::Attachment, Signal::Attachment(styles), None) => !styles.is_empty(),
                    (Framework::TypeIndicator, Signal::Pole(pole), Some(TraitLabel::Axis(axis))) => {
                        pole.axis() == axis
                    }
                    (Framework::Values, Signal::Partner(_), None) => true,
                    _ => false,
                };
                assert!(ok, "question {} has a mismatched option", question.id);
            }
        }
    }

    #[test]
    fn scaled_questions_have_a_weight_per_option() {
        for question in QUESTIONS.iter() {
            if let Some(label) = question.label {
                if let Some(weights) = StandardBank::weights(label) {
                    assert_eq!(weights.len(), question.options.len(), "question {}", question.id);
                }
            }
        }
    }

    #[test]
    fn each_dimension_and_axis_has_two_questions() {
        let count = |label: TraitLabel| QUESTIONS.iter().filter(|q| q.label == Some(label)).count();
        for dimension in BigFive::ALL {
            assert_eq!(count(TraitLabel::BigFive(dimension)), 2);
        }
        for domain in EqDomain::ALL {
            assert_eq!(count(TraitLabel::Eq(domain)), 2);
        }
        for axis in TypeAxis::ALL {
            assert_eq!(count(TraitLabel::Axis(axis)), 2);
        }
    }
}
