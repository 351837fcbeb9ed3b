// 6급 vocabulary. Shipped locked until the earlier grades are finished.

pub static LEVEL6_HANJA: &[(u32, &str, &str, &str)] = &[
    (1, "角", "뿔", "각"),
    (2, "各", "각각", "각"),
    (3, "感", "느낄", "감"),
    (4, "強", "강할", "강"),
    (5, "開", "열", "개"),
    (6, "京", "서울", "경"),
    (7, "界", "지경", "계"),
    (8, "計", "셀", "계"),
    (9, "高", "높을", "고"),
    (10, "苦", "쓸", "고"),
    (11, "古", "예", "고"),
    (12, "功", "공", "공"),
    (13, "公", "공평할", "공"),
    (14, "共", "한가지", "공"),
    (15, "科", "과목", "과"),
    (16, "果", "실과", "과"),
];
