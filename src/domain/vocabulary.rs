//! Static creative vocabulary: the ordered option list per category plus a
//! one-line explanation per option. This is configuration data, not logic;
//! assembly never consults it, only the form and the `categories` listing do.

use super::Category;

/// Display label for the "unset/random" choice in the interactive form.
///
/// Deliberately not part of any option list: an unset category is modeled as
/// the absence of a selection, never as this string.
pub const RANDOM_LABEL: &str = "Ngẫu nhiên";

/// A selectable option together with its explanatory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    pub name: &'static str,
    pub explanation: &'static str,
}

const fn entry(name: &'static str, explanation: &'static str) -> OptionEntry {
    OptionEntry { name, explanation }
}

static THEME: &[OptionEntry] = &[
    entry("Tình yêu", "Những cung bậc cảm xúc trong tình yêu đôi lứa."),
    entry("Chia tay", "Nỗi buồn và sự nuối tiếc khi một mối tình kết thúc."),
    entry("Tuổi trẻ", "Sự sôi nổi, khát khao và những kỷ niệm thanh xuân."),
    entry("Hoài niệm", "Nhớ về những ký ức đẹp đã qua."),
    entry("Thiên nhiên", "Cảnh sắc núi rừng, biển cả và bốn mùa."),
    entry("Thành phố về đêm", "Ánh đèn, nhịp sống và nỗi cô đơn giữa phố thị."),
    entry("Hy vọng", "Niềm tin vào ngày mai tươi sáng hơn."),
    entry("Hành trình", "Những chuyến đi xa và khám phá bản thân."),
];

static MELODY: &[OptionEntry] = &[
    entry("Du dương", "Giai điệu mượt mà, dễ đi vào lòng người."),
    entry("Bắt tai", "Câu nhạc chủ đạo ngắn gọn, lặp lại và dễ nhớ."),
    entry("Bay bổng", "Những quãng rộng tạo cảm giác thăng hoa."),
    entry("Tối giản", "Ít nốt, nhiều khoảng lặng, tập trung vào không gian."),
    entry("Phức tạp", "Nhiều biến tấu và chuyển điệu bất ngờ."),
    entry("U tối", "Giai điệu trầm, mang màu sắc u buồn."),
];

static HARMONY: &[OptionEntry] = &[
    entry("Đơn giản", "Vòng hợp âm quen thuộc, dễ nghe."),
    entry("Phong phú", "Nhiều bè và hợp âm màu sắc."),
    entry("Jazz hiện đại", "Hợp âm mở rộng kiểu jazz, tinh tế và phóng khoáng."),
    entry("Cổ điển", "Hòa thanh chuẩn mực theo truyền thống cổ điển."),
    entry("Nghịch tai", "Cố ý dùng quãng nghịch để tạo căng thẳng."),
];

static RHYTHM: &[OptionEntry] = &[
    entry("Sôi động", "Tiết tấu nhanh, tràn đầy năng lượng."),
    entry("Chậm rãi", "Nhịp thong thả, phù hợp ballad."),
    entry("Groovy", "Nhịp lắc lư cuốn hút, đậm chất funk."),
    entry("Đảo phách", "Trọng âm lệch nhịp tạo cảm giác bất ngờ."),
    entry("Dồn dập", "Trống dày và gấp gáp, đẩy cao trào."),
    entry("Tự do", "Nhịp co giãn theo cảm xúc, không gò bó."),
];

static STRUCTURE: &[OptionEntry] = &[
    entry("Verse-chorus truyền thống", "Phiên khúc và điệp khúc xen kẽ quen thuộc."),
    entry("Có đoạn bridge", "Thêm đoạn chuyển để làm mới trước điệp khúc cuối."),
    entry("Điệp khúc lặp lại", "Điệp khúc xuất hiện nhiều lần, dễ thuộc."),
    entry("Cao trào dần", "Bài hát lớn dần từ tĩnh lặng đến bùng nổ."),
    entry("Tự do", "Không theo khuôn mẫu, phát triển liền mạch."),
];

static INSTRUMENTATION: &[OptionEntry] = &[
    entry("Guitar acoustic", "Tiếng đàn mộc, gần gũi và ấm áp."),
    entry("Piano", "Tiếng dương cầm sang trọng, giàu cảm xúc."),
    entry("Dàn dây", "Violin và cello tạo không gian điện ảnh."),
    entry("Synthesizer", "Âm thanh điện tử hiện đại, nhiều màu sắc."),
    entry("Ban nhạc rock", "Guitar điện, bass và trống đầy năng lượng."),
    entry("Nhạc cụ dân tộc", "Sáo trúc, đàn tranh mang âm hưởng quê hương."),
    entry("Kèn đồng", "Trumpet và saxophone rực rỡ, phóng khoáng."),
];

static GENRE: &[OptionEntry] = &[
    entry("Pop", "Nhạc đại chúng dễ nghe, cấu trúc gọn gàng."),
    entry("Rock", "Mạnh mẽ, guitar điện làm chủ đạo."),
    entry("Ballad", "Chậm, sâu lắng và giàu tự sự."),
    entry("EDM", "Nhạc điện tử sôi động dành cho sàn nhảy."),
    entry("Lo-fi", "Chất âm thô mộc, thư giãn, hơi nhiễu băng cassette."),
    entry("Jazz", "Ngẫu hứng, tinh tế với hòa thanh phong phú."),
    entry("R&B", "Nhịp chậm gợi cảm, giọng hát luyến láy."),
    entry("Indie", "Phóng khoáng, cá tính, không theo thị trường."),
    entry("Rap", "Đọc lời trên nền nhịp mạnh, giàu tiết tấu."),
    entry("Bolero", "Trữ tình quê hương, giai điệu chậm buồn."),
];

static MOOD: &[OptionEntry] = &[
    entry("Vui tươi", "Rộn ràng, tích cực, gợi nụ cười."),
    entry("U sầu", "Man mác buồn, lắng đọng."),
    entry("Lãng mạn", "Ngọt ngào, tình tứ."),
    entry("Hùng tráng", "Hào hùng, mạnh mẽ như nhạc phim sử thi."),
    entry("Thư giãn", "Êm dịu, nhẹ nhàng, xoa dịu tâm trí."),
    entry("Day dứt", "Ám ảnh, khắc khoải khó quên."),
    entry("Hoài niệm", "Gợi nhớ ký ức xưa cũ."),
];

static DYNAMICS: &[OptionEntry] = &[
    entry("Nhẹ nhàng đều đặn", "Cường độ giữ ổn định, êm ái từ đầu tới cuối."),
    entry("Bùng nổ ở điệp khúc", "Phiên khúc nhỏ nhẹ, điệp khúc vỡ òa."),
    entry("Tương phản mạnh", "Chênh lệch lớn giữa đoạn tĩnh và đoạn động."),
    entry("Tăng dần", "Cường độ lớn dần theo thời lượng bài."),
];

static PRODUCTION: &[OptionEntry] = &[
    entry("Sạch và hiện đại", "Bản phối trong trẻo, chuẩn phòng thu hiện nay."),
    entry("Lo-fi ấm áp", "Chất âm mờ ấm, có tạp âm chủ ý."),
    entry("Analog cổ điển", "Màu âm băng từ thập niên cũ."),
    entry("Vang vọng", "Nhiều reverb, không gian rộng và sâu."),
    entry("Thô mộc", "Thu âm trực tiếp, giữ nguyên cảm giác live."),
];

static CREATIVITY: &[OptionEntry] = &[
    entry("Pha trộn thể loại", "Kết hợp hai dòng nhạc tưởng như đối lập."),
    entry("Ảnh hưởng thập niên 80", "Màu sắc synthwave và hoài cổ của những năm 80."),
    entry("Âm hưởng dân gian", "Chất liệu dân ca đan xen hơi thở đương đại."),
    entry("Thử nghiệm", "Âm thanh lạ, phá vỡ quy tắc thông thường."),
    entry("Tối giản", "Cắt bỏ mọi chi tiết thừa, chỉ giữ phần cốt lõi."),
];

static VOCAL_STYLE: &[OptionEntry] = &[
    entry("Giọng nữ cao", "Trong trẻo, bay ở âm khu cao."),
    entry("Giọng nam trầm", "Ấm, dày và từng trải."),
    entry("Song ca", "Giọng nam nữ đối đáp, hòa quyện."),
    entry("Rap", "Đọc lời nhanh, nhấn nhá theo nhịp."),
    entry("Giọng thì thầm", "Hát nhỏ, gần, đầy tâm sự."),
    entry("Acapella", "Chỉ có giọng hát, không nhạc đệm."),
];

/// Ordered option list for a category.
pub fn options(category: Category) -> &'static [OptionEntry] {
    match category {
        Category::Theme => THEME,
        Category::Melody => MELODY,
        Category::Harmony => HARMONY,
        Category::Rhythm => RHYTHM,
        Category::Structure => STRUCTURE,
        Category::Instrumentation => INSTRUMENTATION,
        Category::Genre => GENRE,
        Category::Mood => MOOD,
        Category::Dynamics => DYNAMICS,
        Category::Production => PRODUCTION,
        Category::Creativity => CREATIVITY,
        Category::VocalStyle => VOCAL_STYLE,
    }
}

/// Explanation text for a known category option, if any.
pub fn explanation(category: Category, option: &str) -> Option<&'static str> {
    options(category).iter().find(|entry| entry.name == option).map(|entry| entry.explanation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_options() {
        for category in Category::ALL {
            assert!(!options(category).is_empty(), "no options for {category}");
        }
    }

    #[test]
    fn no_option_collides_with_the_random_label() {
        for category in Category::ALL {
            for entry in options(category) {
                assert_ne!(entry.name, RANDOM_LABEL, "{category} lists the sentinel label");
            }
        }
    }

    #[test]
    fn explanations_are_present_and_found_by_lookup() {
        for category in Category::ALL {
            for entry in options(category) {
                assert!(!entry.explanation.is_empty());
                assert_eq!(explanation(category, entry.name), Some(entry.explanation));
            }
        }
    }

    #[test]
    fn unknown_option_has_no_explanation() {
        assert_eq!(explanation(Category::Genre, "Vaporwave"), None);
    }
}
