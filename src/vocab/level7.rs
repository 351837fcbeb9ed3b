// 7급 vocabulary (id, character, gloss, pronunciation).

pub static LEVEL7_HANJA: &[(u32, &str, &str, &str)] = &[
    (1, "江", "강", "강"),
    (2, "空", "빌", "공"),
    (3, "氣", "기운", "기"),
    (4, "男", "사내", "남"),
    (5, "內", "안", "내"),
    (6, "農", "농사", "농"),
    (7, "答", "대답", "답"),
    (8, "道", "길", "도"),
    (9, "動", "움직일", "동"),
    (10, "力", "힘", "력"),
    (11, "立", "설", "립"),
    (12, "每", "매양", "매"),
    (13, "名", "이름", "명"),
    (14, "物", "물건", "물"),
    (15, "方", "모", "방"),
    (16, "不", "아닐", "불"),
    (17, "事", "일", "사"),
    (18, "上", "윗", "상"),
    (19, "姓", "성", "성"),
    (20, "世", "인간", "세"),
    (21, "手", "손", "수"),
    (22, "時", "때", "시"),
    (23, "市", "저자", "시"),
    (24, "食", "밥", "식"),
    (25, "安", "편안", "안"),
    (26, "午", "낮", "오"),
    (27, "右", "오를", "우"),
    (28, "子", "아들", "자"),
    (29, "自", "스스로", "자"),
    (30, "場", "마당", "장"),
    (31, "電", "번개", "전"),
    (32, "前", "앞", "전"),
    (33, "正", "바를", "정"),
    (34, "足", "발", "족"),
    (35, "左", "왼", "좌"),
    (36, "直", "곧을", "직"),
    (37, "平", "평평할", "평"),
    (38, "下", "아래", "하"),
    (39, "漢", "한수", "한"),
    (40, "海", "바다", "해"),
    (41, "話", "말씀", "화"),
    (42, "活", "살", "활"),
    (43, "孝", "효도", "효"),
    (44, "後", "뒤", "후"),
];
