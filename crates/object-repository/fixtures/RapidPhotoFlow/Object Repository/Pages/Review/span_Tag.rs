<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Individual tag badge</description>
   <name>span_Tag</name>
   <tag></tag>
   <elementGuidId>review-tag-badge</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//span[contains(@class, 'badge') or contains(@class, 'tag')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>.badge, .tag, [data-testid='tag']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
