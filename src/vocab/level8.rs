// 8급: the first grade of the hanja proficiency ladder.
// Tuple layout: (id, character, gloss, pronunciation).

pub static LEVEL8_HANJA: &[(u32, &str, &str, &str)] = &[
    (1, "日", "날", "일"),
    (2, "月", "달", "월"),
    (3, "火", "불", "화"),
    (4, "水", "물", "수"),
    (5, "木", "나무", "목"),
    (6, "金", "쇠", "금"),
    (7, "土", "흙", "토"),
    (8, "山", "메", "산"),
    (9, "一", "한", "일"),
    (10, "二", "두", "이"),
    (11, "三", "석", "삼"),
    (12, "四", "넉", "사"),
    (13, "五", "다섯", "오"),
    (14, "六", "여섯", "륙"),
    (15, "七", "일곱", "칠"),
    (16, "八", "여덟", "팔"),
    (17, "九", "아홉", "구"),
    (18, "十", "열", "십"),
    (19, "大", "큰", "대"),
    (20, "小", "작을", "소"),
    (21, "中", "가운데", "중"),
    (22, "人", "사람", "인"),
    (23, "父", "아비", "부"),
    (24, "母", "어미", "모"),
    (25, "兄", "형", "형"),
    (26, "弟", "아우", "제"),
    (27, "女", "계집", "녀"),
    (28, "王", "임금", "왕"),
    (29, "東", "동녘", "동"),
    (30, "西", "서녘", "서"),
    (31, "南", "남녘", "남"),
    (32, "北", "북녘", "북"),
    (33, "年", "해", "년"),
    (34, "生", "날", "생"),
    (35, "先", "먼저", "선"),
    (36, "學", "배울", "학"),
    (37, "校", "학교", "교"),
    (38, "門", "문", "문"),
    (39, "國", "나라", "국"),
    (40, "韓", "나라", "한"),
    (41, "民", "백성", "민"),
    (42, "靑", "푸를", "청"),
    (43, "白", "흰", "백"),
    (44, "外", "바깥", "외"),
    (45, "寸", "마디", "촌"),
];
