//! 謝罪文の生成（副作用なし）
//!
//! 時刻と乱数は引数で受け取る。絵文字を使わなければ同じ入力から常に同じ文字列になる。

use chrono::{DateTime, Local};
use common::ports::outbound::{Clock, RandomSource};

use crate::domain::{GenerationRequest, HEART_EMOJIS};

/// 絵文字を付ける間隔（i % 5 == 0 の行）
const EMOJI_EVERY: u32 = 5;
/// 空行を挟む間隔（最終行の後には挟まない）
const BLANK_LINE_EVERY: u32 = 10;

const CLOSING_HEADER: &str = "\n\n💕 Forever yours,\n";
const CLOSING_WITH_TIMESTAMP: &str = "Sent with love ❤️";
const CLOSING_PLAIN: &str = "With all my love ❤️";

/// 例: `10/19/2026 at 3:04:05 PM`
fn format_timestamp_line(now: &DateTime<Local>) -> String {
    format!(
        "📅 {} at {}\n\n",
        now.format("%-m/%-d/%Y"),
        now.format("%-I:%M:%S %p")
    )
}

/// 検証済みリクエストから謝罪文を組み立てる
pub fn generate(request: &GenerationRequest, clock: &dyn Clock, rng: &dyn RandomSource) -> String {
    let template = request.style().template();
    let message = request.message();
    let count = request.count();

    let per_line = template.separator.len() + message.len() + 8;
    let mut text = String::with_capacity(per_line * count as usize + 256);

    if request.add_timestamp() {
        text.push_str(&format_timestamp_line(&clock.now_local()));
    }
    text.push_str(&format!("Dear {},\n\n", request.name()));
    text.push_str(&format!("{}{}{}\n\n", template.prefix, message, template.suffix));

    for i in 1..=count {
        text.push_str(template.separator);
        text.push_str(message);
        if request.add_emojis() && i % EMOJI_EVERY == 0 {
            let idx = rng.next_index(HEART_EMOJIS.len()) % HEART_EMOJIS.len();
            text.push(' ');
            text.push_str(HEART_EMOJIS[idx]);
        }
        if i % BLANK_LINE_EVERY == 0 && i != count {
            text.push('\n');
        }
    }

    text.push_str(CLOSING_HEADER);
    text.push_str(if request.add_timestamp() {
        CLOSING_WITH_TIMESTAMP
    } else {
        CLOSING_PLAIN
    });
    text
}

/// 簡易版: `1- name`, `2- name`, ... を count 行。count <= 0 なら空文字列。
pub fn repeat(name: &str, count: i64) -> String {
    (1..=count.max(0))
        .map(|i| format!("{}- {}\n", i, name))
        .collect()
}
