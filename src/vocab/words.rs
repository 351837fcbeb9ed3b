// Puzzle words: (hanja, reading, syllables, example sentence).
// Each example contains the reading exactly once.

pub static PUZZLE_WORDS: &[(&str, &str, &[&str], &str)] = &[
    ("韓國", "한국", &["한", "국"], "우리나라의 이름은 한국이에요."),
    ("學校", "학교", &["학", "교"], "아침마다 학교에 걸어가요."),
    ("先生", "선생", &["선", "생"], "선생님께서 칭찬해 주셨어요."),
    ("父母", "부모", &["부", "모"], "부모님께 편지를 썼어요."),
    ("兄弟", "형제", &["형", "제"], "우리 형제는 사이가 좋아요."),
    ("山水", "산수", &["산", "수"], "이곳은 산수가 아름다워요."),
    ("火山", "화산", &["화", "산"], "화산이 연기를 뿜어요."),
    ("生日", "생일", &["생", "일"], "오늘은 내 생일이에요."),
    ("東西", "동서", &["동", "서"], "길이 동서로 길게 뻗어 있어요."),
    ("南北", "남북", &["남", "북"], "남북이 함께 노래했어요."),
    ("國民", "국민", &["국", "민"], "국민 모두가 축하했어요."),
    ("人生", "인생", &["인", "생"], "할아버지는 인생 이야기를 들려주셨어요."),
    ("中心", "중심", &["중", "심"], "공원 중심에 분수가 있어요."),
    ("女王", "여왕", &["여", "왕"], "여왕이 성에 살았어요."),
    ("三寸", "삼촌", &["삼", "촌"], "삼촌과 낚시를 갔어요."),
    ("外國", "외국", &["외", "국"], "외국에서 친구가 왔어요."),
    ("靑年", "청년", &["청", "년"], "청년이 길을 알려 주었어요."),
    ("大門", "대문", &["대", "문"], "대문을 활짝 열었어요."),
    ("十月", "시월", &["시", "월"], "시월에는 단풍이 들어요."),
    ("木手", "목수", &["목", "수"], "목수가 의자를 만들었어요."),
    ("電話", "전화", &["전", "화"], "엄마에게 전화를 걸었어요."),
    ("食事", "식사", &["식", "사"], "가족과 함께 식사를 해요."),
    ("手話", "수화", &["수", "화"], "수화로 인사를 나눠요."),
    ("大韓民國", "대한민국", &["대", "한", "민", "국"], "우리는 대한민국 어린이예요."),
];
