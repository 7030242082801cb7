<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Recently uploaded photos section</description>
   <name>div_RecentUploads</name>
   <tag></tag>
   <elementGuidId>upload-recent-section</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[contains(@class, 'recent') or .//*[contains(text(), 'Recently')]]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='recent-uploads'], section.recent-uploads</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
